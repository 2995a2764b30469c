//! Configuration management for the dispatcher
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::AutomationError};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Print commands instead of executing them
    pub dry_run: bool,
    /// External tool binaries
    pub tools: ToolConfig,
    /// Multiplatform build settings
    pub buildx: BuildxConfig,
}

/// External tool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Container engine CLI
    pub docker: String,
    /// Orchestration CLI
    pub kubectl: String,
}

/// Buildx configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildxConfig {
    /// Name of the builder created before multiplatform builds
    pub builder_name: String,
    /// Target platforms
    pub platforms: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            docker: "docker".to_string(),
            kubectl: "kubectl".to_string(),
        }
    }
}

impl Default for BuildxConfig {
    fn default() -> Self {
        Self {
            builder_name: "multiarch_builder".to_string(),
            platforms: vec![
                "linux/amd64".to_string(),
                "linux/arm64".to_string(),
                "linux/arm/v7".to_string(),
            ],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            dry_run: false,
            tools: ToolConfig::default(),
            buildx: BuildxConfig::default(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, AutomationError> {
        let config = Self {
            debug: args.debug,
            dry_run: args.dry_run,
            tools: ToolConfig {
                docker: args.docker_bin.trim().to_string(),
                kubectl: args.kubectl_bin.trim().to_string(),
            },
            buildx: BuildxConfig {
                builder_name: args.builder_name.trim().to_string(),
                platforms: args
                    .platforms
                    .iter()
                    .map(|p| p.trim())
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AutomationError> {
        if self.tools.docker.is_empty() {
            return Err(AutomationError::config("docker binary must not be empty"));
        }

        if self.tools.kubectl.is_empty() {
            return Err(AutomationError::config("kubectl binary must not be empty"));
        }

        if self.buildx.builder_name.is_empty() {
            return Err(AutomationError::config("builder name must not be empty"));
        }

        if self.buildx.platforms.is_empty() {
            return Err(AutomationError::config(
                "at least one build platform is required",
            ));
        }

        Ok(())
    }

    /// Platforms joined the way `--platform` expects them
    #[must_use]
    pub fn platform_list(&self) -> String {
        self.buildx.platforms.join(",")
    }
}
