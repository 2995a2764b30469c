//! Argument lists for the container engine CLI

use crate::{config::Config, core::request::PortMapping, utils::process::Invocation};

/// Builds invocations of the container engine binary
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
    builder_name: String,
    platforms: String,
}

impl DockerCli {
    /// Create a builder for the binary and buildx settings in `config`
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.tools.docker.clone(),
            builder_name: config.buildx.builder_name.clone(),
            platforms: config.platform_list(),
        }
    }

    fn invocation<const N: usize>(&self, args: [&str; N]) -> Invocation {
        Invocation::new(self.program.as_str(), args)
    }

    /// `docker build -t IMAGE CONTEXT`
    #[must_use]
    pub fn build(&self, image: &str, context: &str) -> Invocation {
        self.invocation(["build", "-t", image, context])
    }

    /// `docker run -d --name NAME [-p EXPOSED:APP] IMAGE`
    #[must_use]
    pub fn run(&self, image: &str, container: &str, publish: Option<&PortMapping>) -> Invocation {
        match publish {
            Some(ports) => {
                let mapping = format!("{}:{}", ports.exposed, ports.application);
                self.invocation(["run", "-d", "--name", container, "-p", mapping.as_str(), image])
            }
            None => self.invocation(["run", "-d", "--name", container, image]),
        }
    }

    /// `docker start NAME`
    #[must_use]
    pub fn start(&self, container: &str) -> Invocation {
        self.invocation(["start", container])
    }

    /// `docker stop NAME`
    #[must_use]
    pub fn stop(&self, container: &str) -> Invocation {
        self.invocation(["stop", container])
    }

    /// `docker rm NAME`
    #[must_use]
    pub fn remove(&self, container: &str) -> Invocation {
        self.invocation(["rm", container])
    }

    /// Create the buildx builder, then build and push for every platform.
    ///
    /// The create step fails when the builder already exists, so it is
    /// allowed to fail.
    #[must_use]
    pub fn build_multiplatform(&self, image: &str, context: &str) -> Vec<Invocation> {
        vec![
            self.invocation(["buildx", "create", "--name", self.builder_name.as_str()])
                .allow_failure(),
            self.invocation([
                "buildx",
                "build",
                "--builder",
                self.builder_name.as_str(),
                "--platform",
                self.platforms.as_str(),
                "-t",
                image,
                context,
                "--push",
            ]),
        ]
    }

    /// Log in with the password on stdin, then push
    #[must_use]
    pub fn push(&self, username: &str, password: &str, image: &str) -> Vec<Invocation> {
        vec![
            self.invocation(["login", "-u", username, "--password-stdin"])
                .with_stdin(password),
            self.invocation(["push", image]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docker() -> DockerCli {
        DockerCli::new(&Config::default())
    }

    #[test]
    fn test_simple_container_commands() {
        let docker = docker();
        assert_eq!(docker.build("app", ".").arg_strs(), ["build", "-t", "app", "."]);
        assert_eq!(docker.start("web").arg_strs(), ["start", "web"]);
        assert_eq!(docker.stop("web").arg_strs(), ["stop", "web"]);
        assert_eq!(docker.remove("web").arg_strs(), ["rm", "web"]);
        assert_eq!(docker.start("web").program, "docker");
    }

    #[test]
    fn test_run_with_and_without_ports() {
        let docker = docker();
        let ports = PortMapping {
            exposed: "8080".into(),
            application: "80".into(),
        };
        assert_eq!(
            docker.run("nginx", "front", Some(&ports)).to_string(),
            "docker run -d --name front -p 8080:80 nginx"
        );
        assert_eq!(
            docker.run("redis", "cache", None).to_string(),
            "docker run -d --name cache redis"
        );
    }

    #[test]
    fn test_build_multiplatform() {
        let steps = docker().build_multiplatform("me/app", "./ctx");
        assert_eq!(steps.len(), 2);
        assert!(steps[0].allow_failure);
        assert_eq!(
            steps[0].to_string(),
            "docker buildx create --name multiarch_builder"
        );
        assert!(!steps[1].allow_failure);
        assert_eq!(
            steps[1].to_string(),
            "docker buildx build --builder multiarch_builder \
             --platform linux/amd64,linux/arm64,linux/arm/v7 -t me/app ./ctx --push"
        );
    }

    #[test]
    fn test_push_keeps_password_off_argv() {
        let steps = docker().push("alice", "hunter2", "me/app");
        assert_eq!(steps[0].arg_strs(), ["login", "-u", "alice", "--password-stdin"]);
        assert_eq!(steps[0].stdin.as_deref(), Some("hunter2"));
        assert_eq!(steps[1].arg_strs(), ["push", "me/app"]);
        assert!(steps.iter().all(|s| !s.args.iter().any(|a| a.contains("hunter2"))));
    }

    #[test]
    fn test_custom_binary() {
        let mut config = Config::default();
        config.tools.docker = "podman".into();
        assert_eq!(DockerCli::new(&config).stop("x").to_string(), "podman stop x");
    }
}
