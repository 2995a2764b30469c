//! Typed parameters for each menu operation
//!
//! A [`Request`] is collected from the prompter before anything runs, so a
//! missing value fails the operation without spawning a process.

use crate::{
    core::operation::Operation,
    error::{AutomationError, Result},
    utils::prompt::Prompter,
};
use std::{fmt, num::NonZeroU32};

const IMAGE_PROMPT: &str = "Enter image name: ";
const CONTAINER_PROMPT: &str = "Enter container name: ";
const DOCKERFILE_PROMPT: &str = "Enter docker file path: ";
const EXPOSED_PORT_PROMPT: &str = "Enter exposed port: ";
const APP_PORT_PROMPT: &str = "Enter application port: ";

/// Run option selecting port publishing
pub const WEB_RUN_OPTION: &str = "web";

/// Host port published to a container or service port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortMapping {
    /// Port exposed to the outside
    pub exposed: String,
    /// Port the application listens on
    pub application: String,
}

/// A credential whose `Debug` output is redacted
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw value, for handing to the child process
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Parameters of one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    BuildImage {
        image: String,
        context: String,
    },
    RunContainer {
        image: String,
        container: String,
        /// Set for the `web` run option
        publish: Option<PortMapping>,
    },
    StartContainer {
        container: String,
    },
    StopContainer {
        container: String,
    },
    RemoveContainer {
        container: String,
    },
    BuildMultiplatformImage {
        image: String,
        context: String,
    },
    PushImage {
        username: String,
        password: Secret,
        image: String,
    },
    CreateDeployment {
        image: String,
        deployment: String,
        ports: PortMapping,
        replicas: Option<NonZeroU32>,
    },
    CreateService {
        service: String,
        deployment: String,
        ports: PortMapping,
    },
}

impl Request {
    /// Ask for the parameters of `operation`
    pub fn collect<P: Prompter + ?Sized>(operation: Operation, prompter: &mut P) -> Result<Self> {
        let request = match operation {
            Operation::BuildImage => Self::BuildImage {
                image: required(prompter, IMAGE_PROMPT, "image name")?,
                context: required(prompter, DOCKERFILE_PROMPT, "docker file path")?,
            },
            Operation::RunContainer => {
                let web = prompter.ask("Enter run option: ")?.trim() == WEB_RUN_OPTION;
                let image = required(prompter, IMAGE_PROMPT, "image name")?;
                let container = required(prompter, CONTAINER_PROMPT, "container name")?;
                let publish = if web {
                    Some(ports(prompter)?)
                } else {
                    None
                };
                Self::RunContainer {
                    image,
                    container,
                    publish,
                }
            }
            Operation::StartContainer => Self::StartContainer {
                container: required(prompter, CONTAINER_PROMPT, "container name")?,
            },
            Operation::StopContainer => Self::StopContainer {
                container: required(prompter, CONTAINER_PROMPT, "container name")?,
            },
            Operation::RemoveContainer => Self::RemoveContainer {
                container: required(prompter, CONTAINER_PROMPT, "container name")?,
            },
            Operation::BuildMultiplatformImage => Self::BuildMultiplatformImage {
                image: required(prompter, IMAGE_PROMPT, "image name")?,
                context: required(prompter, DOCKERFILE_PROMPT, "docker file path")?,
            },
            Operation::PushImage => {
                let username = required(prompter, "Enter username: ", "username")?;
                let password = prompter.ask_secret("Enter password: ")?;
                if password.is_empty() {
                    return Err(AutomationError::validation("password must not be empty"));
                }
                Self::PushImage {
                    username,
                    password: Secret::new(password),
                    image: required(prompter, IMAGE_PROMPT, "image name")?,
                }
            }
            Operation::CreateDeployment | Operation::CreateDeploymentWithReplicas => {
                let image = required(prompter, IMAGE_PROMPT, "image name")?;
                let deployment = required(prompter, CONTAINER_PROMPT, "container name")?;
                let ports = ports(prompter)?;
                let replicas = if operation == Operation::CreateDeploymentWithReplicas {
                    Some(replica_count(prompter)?)
                } else {
                    None
                };
                Self::CreateDeployment {
                    image,
                    deployment,
                    ports,
                    replicas,
                }
            }
            Operation::CreateService => Self::CreateService {
                service: required(prompter, "Enter service name: ", "service name")?,
                deployment: required(prompter, CONTAINER_PROMPT, "container name")?,
                ports: ports(prompter)?,
            },
        };
        Ok(request)
    }

    /// Message printed once every step succeeded
    #[must_use]
    pub fn success_message(&self) -> String {
        match self {
            Self::BuildImage { image, .. } | Self::BuildMultiplatformImage { image, .. } => {
                format!("Image {image} built")
            }
            Self::RunContainer {
                container,
                publish: Some(ports),
                ..
            } => format!("Container {container} running on port {}", ports.exposed),
            Self::RunContainer { container, .. } => format!("Container {container} running"),
            Self::StartContainer { container } => format!("Container {container} started"),
            Self::StopContainer { container } => format!("Container {container} stopped"),
            Self::RemoveContainer { container } => format!("Container {container} removed"),
            Self::PushImage { image, .. } => format!("Image {image} pushed"),
            Self::CreateDeployment { deployment, .. } => format!("Deployment {deployment} created"),
            Self::CreateService { service, .. } => format!("Service {service} created"),
        }
    }
}

/// Ask for a value that must not be blank
fn required<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str, field: &str) -> Result<String> {
    let value = prompter.ask(prompt)?.trim().to_string();
    if value.is_empty() {
        return Err(AutomationError::validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(value)
}

fn ports<P: Prompter + ?Sized>(prompter: &mut P) -> Result<PortMapping> {
    Ok(PortMapping {
        exposed: required(prompter, EXPOSED_PORT_PROMPT, "exposed port")?,
        application: required(prompter, APP_PORT_PROMPT, "application port")?,
    })
}

fn replica_count<P: Prompter + ?Sized>(prompter: &mut P) -> Result<NonZeroU32> {
    let raw = required(prompter, "Enter number of replicas: ", "number of replicas")?;
    raw.parse().map_err(|_| {
        AutomationError::validation(format!(
            "number of replicas must be a positive integer, got '{raw}'"
        ))
    })
}
