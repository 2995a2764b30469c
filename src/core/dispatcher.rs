//! Operation dispatch and the interactive menu session
//!
//! Turns a [`Request`] into its invocations, runs them one at a time, and
//! drives the menu loop on top of that.

use crate::{
    config::Config,
    core::{docker::DockerCli, kubernetes::KubectlCli, operation::Operation, request::Request},
    error::{AutomationError, Result},
    utils::{
        process::{CommandExecutor, Invocation},
        prompt::Prompter,
    },
};
use std::io::Write;
use tracing::{debug, error, info, instrument, warn};

const CONTINUE_PROMPT: &str = "Do you want to continue (y/n): ";

/// Result of handling one menu answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Every step succeeded; carries the success message
    Completed(String),
    /// The answer did not name a menu entry
    InvalidChoice,
}

/// Counters reported when a session ends
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub completed: usize,
    pub failed: usize,
    pub invalid: usize,
}

/// Maps requests to external commands and executes them
pub struct Dispatcher<E> {
    executor: E,
    docker: DockerCli,
    kubectl: KubectlCli,
}

impl<E: CommandExecutor> Dispatcher<E> {
    /// Create a dispatcher for the tools in `config`
    pub fn new(config: &Config, executor: E) -> Self {
        Self {
            executor,
            docker: DockerCli::new(config),
            kubectl: KubectlCli::new(config),
        }
    }

    /// The executor commands are sent to
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    /// Invocations for `request`, in execution order
    #[must_use]
    pub fn plan(&self, request: &Request) -> Vec<Invocation> {
        match request {
            Request::BuildImage { image, context } => vec![self.docker.build(image, context)],
            Request::RunContainer {
                image,
                container,
                publish,
            } => vec![self.docker.run(image, container, publish.as_ref())],
            Request::StartContainer { container } => vec![self.docker.start(container)],
            Request::StopContainer { container } => vec![self.docker.stop(container)],
            Request::RemoveContainer { container } => vec![self.docker.remove(container)],
            Request::BuildMultiplatformImage { image, context } => {
                self.docker.build_multiplatform(image, context)
            }
            Request::PushImage {
                username,
                password,
                image,
            } => self.docker.push(username, password.expose(), image),
            Request::CreateDeployment {
                image,
                deployment,
                ports,
                replicas,
            } => self.kubectl.deploy(deployment, image, ports, *replicas),
            Request::CreateService {
                service,
                deployment,
                ports,
            } => vec![self.kubectl.expose(deployment, ports, Some(service))],
        }
    }

    /// Run every step of `request`, stopping at the first failure that is
    /// not allowed to fail
    #[instrument(skip(self, request))]
    pub fn execute(&self, request: &Request) -> Result<String> {
        let steps = self.plan(request);
        let total = steps.len();

        for (i, step) in steps.iter().enumerate() {
            debug!("Running step {} of {}: {}", i + 1, total, step.program);

            match self.executor.execute(step) {
                Ok(result) if result.is_dry_run() => debug!("Step {} printed", i + 1),
                Ok(result) => debug!(
                    "Step {} completed with exit code {:?}",
                    i + 1,
                    result.exit_code
                ),
                Err(e) if step.allow_failure => {
                    warn!("Step {} failed, continuing: {}", i + 1, e);
                }
                Err(e) => {
                    warn!("Step {} failed: {}", i + 1, e);
                    return Err(e);
                }
            }
        }

        Ok(request.success_message())
    }

    /// Handle one menu answer: collect parameters and execute
    pub fn dispatch<P: Prompter + ?Sized>(&self, choice: &str, prompter: &mut P) -> Result<Dispatch> {
        let Some(operation) = Operation::from_choice(choice) else {
            debug!("Rejected menu choice: {:?}", choice);
            return Ok(Dispatch::InvalidChoice);
        };

        info!("Selected: {}", operation.label());
        let request = Request::collect(operation, prompter)?;
        self.execute(&request).map(Dispatch::Completed)
    }

    /// Show the menu until the user declines to continue or input ends
    pub fn run_session<P, W>(&self, prompter: &mut P, out: &mut W) -> Result<SessionSummary>
    where
        P: Prompter + ?Sized,
        W: Write,
    {
        let mut summary = SessionSummary::default();

        loop {
            write!(out, "{}", Operation::menu()).map_err(AutomationError::Output)?;

            let outcome = match prompter.ask("Enter your choice: ") {
                Ok(choice) => self.dispatch(&choice, prompter),
                Err(e) if e.is_input_closed() => break,
                Err(e @ AutomationError::Input { .. }) => {
                    warn!("Unreadable menu choice: {}", e);
                    Ok(Dispatch::InvalidChoice)
                }
                Err(e) => Err(e),
            };

            match outcome {
                Ok(Dispatch::Completed(message)) => {
                    summary.completed += 1;
                    writeln!(out, "{message}").map_err(AutomationError::Output)?;
                }
                Ok(Dispatch::InvalidChoice) => {
                    summary.invalid += 1;
                    writeln!(out, "Invalid choice").map_err(AutomationError::Output)?;
                }
                Err(e) if e.is_input_closed() => break,
                Err(e) => {
                    summary.failed += 1;
                    error!("Operation failed: {}", e);
                    writeln!(out, "Operation failed: {e}").map_err(AutomationError::Output)?;
                }
            }

            match prompter.ask(CONTINUE_PROMPT) {
                Ok(answer) if answer.trim() == "n" => break,
                Ok(_) => {}
                Err(e) if e.is_input_closed() => break,
                Err(e) => return Err(e),
            }
        }

        info!(
            "Session finished: {} completed, {} failed, {} invalid",
            summary.completed, summary.failed, summary.invalid
        );
        Ok(summary)
    }
}
