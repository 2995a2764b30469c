//! Core functionality for the dispatcher
//!
//! Contains the menu, the typed operation requests, the command builders for
//! docker and kubectl, and the dispatcher that runs them.

pub mod dispatcher;
pub mod docker;
pub mod kubernetes;
pub mod operation;
pub mod request;

pub use dispatcher::{Dispatch, Dispatcher, SessionSummary};
pub use docker::DockerCli;
pub use kubernetes::KubectlCli;
pub use operation::Operation;
pub use request::{PortMapping, Request, Secret};
