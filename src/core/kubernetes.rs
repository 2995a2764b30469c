//! Argument lists for the orchestration CLI

use crate::{config::Config, core::request::PortMapping, utils::process::Invocation};
use std::num::NonZeroU32;

/// Builds invocations of the orchestration binary
#[derive(Debug, Clone)]
pub struct KubectlCli {
    program: String,
}

impl KubectlCli {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.tools.kubectl.clone(),
        }
    }

    /// `kubectl create deployment NAME --image IMAGE [--replicas N]`
    #[must_use]
    pub fn create_deployment(
        &self,
        deployment: &str,
        image: &str,
        replicas: Option<NonZeroU32>,
    ) -> Invocation {
        let mut args = vec![
            "create".to_string(),
            "deployment".to_string(),
            deployment.to_string(),
            "--image".to_string(),
            image.to_string(),
        ];
        if let Some(replicas) = replicas {
            args.push("--replicas".to_string());
            args.push(replicas.to_string());
        }
        Invocation::new(self.program.as_str(), args)
    }

    /// `kubectl expose deployment NAME --port P --target-port T [--name SERVICE]`
    #[must_use]
    pub fn expose(
        &self,
        deployment: &str,
        ports: &PortMapping,
        service: Option<&str>,
    ) -> Invocation {
        let mut args = vec![
            "expose",
            "deployment",
            deployment,
            "--port",
            ports.exposed.as_str(),
            "--target-port",
            ports.application.as_str(),
        ];
        if let Some(service) = service {
            args.extend(["--name", service]);
        }
        Invocation::new(self.program.as_str(), args)
    }

    /// Create the deployment, then expose it under its own name
    #[must_use]
    pub fn deploy(
        &self,
        deployment: &str,
        image: &str,
        ports: &PortMapping,
        replicas: Option<NonZeroU32>,
    ) -> Vec<Invocation> {
        vec![
            self.create_deployment(deployment, image, replicas),
            self.expose(deployment, ports, None),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ports() -> PortMapping {
        PortMapping {
            exposed: "80".into(),
            application: "8080".into(),
        }
    }

    #[test]
    fn test_deploy_without_replicas() {
        let kubectl = KubectlCli::new(&Config::default());
        let steps = kubectl.deploy("api", "me/api:1", &ports(), None);
        assert_eq!(
            steps[0].to_string(),
            "kubectl create deployment api --image me/api:1"
        );
        assert_eq!(
            steps[1].to_string(),
            "kubectl expose deployment api --port 80 --target-port 8080"
        );
    }

    #[test]
    fn test_deploy_with_replicas() {
        let kubectl = KubectlCli::new(&Config::default());
        let steps = kubectl.deploy("api", "me/api:1", &ports(), NonZeroU32::new(3));
        assert_eq!(
            steps[0].arg_strs(),
            ["create", "deployment", "api", "--image", "me/api:1", "--replicas", "3"]
        );
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn test_named_service() {
        let kubectl = KubectlCli::new(&Config::default());
        assert_eq!(
            kubectl.expose("api", &ports(), Some("api-svc")).to_string(),
            "kubectl expose deployment api --port 80 --target-port 8080 --name api-svc"
        );
    }
}
