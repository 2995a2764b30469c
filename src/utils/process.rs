//! Process execution utilities
//!
//! Provides process execution with proper error handling and logging. The
//! dispatcher only talks to [`CommandExecutor`], so tests can swap the real
//! runner for a recording one.

use crate::error::{AutomationError, Result};
use std::{
    fmt,
    io::Write,
    process::{Command, Stdio},
};
use tracing::{debug, info, instrument};

/// One external command: program, arguments and an optional stdin payload
#[derive(Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute
    pub program: String,
    /// Argument list, passed verbatim
    pub args: Vec<String>,
    /// Data written to the child's stdin (never displayed or logged)
    pub stdin: Option<String>,
    /// Whether a failure of this step should not abort the following steps
    pub allow_failure: bool,
}

impl Invocation {
    /// Create an invocation of `program` with `args`
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdin: None,
            allow_failure: false,
        }
    }

    /// Feed `input` to the child's stdin
    #[must_use]
    pub fn with_stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Let the following steps run even if this one fails
    #[must_use]
    pub const fn allow_failure(mut self) -> Self {
        self.allow_failure = true;
        self
    }

    /// Arguments as string slices
    pub fn arg_strs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("stdin", &self.stdin.as_ref().map(|_| "<redacted>"))
            .field("allow_failure", &self.allow_failure)
            .finish()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        if self.stdin.is_some() {
            write!(f, " < (stdin)")?;
        }
        Ok(())
    }
}

/// Result of a process execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Exit status code, `None` for dry runs
    pub exit_code: Option<i32>,
}

impl ProcessResult {
    /// Whether the command was only printed
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.exit_code.is_none()
    }
}

/// Anything able to carry out an [`Invocation`]
pub trait CommandExecutor {
    /// Execute one invocation. Non-zero exits are errors.
    fn execute(&self, invocation: &Invocation) -> Result<ProcessResult>;
}

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
    dry_run: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool, dry_run: bool) -> Self {
        Self { debug, dry_run }
    }

    /// Whether commands are only printed
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Check if a command exists in PATH
    #[instrument(skip(self))]
    pub fn command_exists(&self, command: &str) -> bool {
        debug!("Checking if command exists: {}", command);

        let result = Command::new("which")
            .arg(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                let exists = status.success();
                debug!("Command '{}' exists: {}", command, exists);
                exists
            }
            Err(e) => {
                debug!("Failed to check if command '{}' exists: {}", command, e);
                false
            }
        }
    }

    fn spawn(&self, invocation: &Invocation) -> Result<ProcessResult> {
        let cmd_str = invocation.to_string();

        info!("+ {}", cmd_str);
        if self.debug {
            debug!("stdin payload attached: {}", invocation.stdin.is_some());
        }

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        let mut child = cmd.spawn().map_err(|e| {
            AutomationError::process(
                cmd_str.clone(),
                None,
                format!("Failed to execute command: {e}"),
            )
        })?;

        // The child is always waited on, even when feeding stdin failed.
        let write_result = match (&invocation.stdin, child.stdin.take()) {
            (Some(input), Some(mut pipe)) => pipe
                .write_all(input.as_bytes())
                .and_then(|()| pipe.write_all(b"\n")),
            _ => Ok(()),
        };

        let status = child.wait().map_err(|e| {
            AutomationError::process(
                cmd_str.clone(),
                None,
                format!("Failed to wait for command: {e}"),
            )
        })?;

        let exit_code = status.code();
        if !status.success() {
            return Err(AutomationError::process(
                cmd_str,
                exit_code,
                format!("Command failed with exit code: {exit_code:?}"),
            ));
        }

        if let Err(e) = write_result {
            return Err(AutomationError::process(
                cmd_str,
                exit_code,
                format!("Failed to write to stdin: {e}"),
            ));
        }

        debug!("Command completed successfully");
        Ok(ProcessResult { exit_code })
    }
}

impl CommandExecutor for ProcessRunner {
    #[instrument(skip(self, invocation), fields(program = %invocation.program))]
    fn execute(&self, invocation: &Invocation) -> Result<ProcessResult> {
        if self.dry_run {
            println!("would run: {invocation}");
            return Ok(ProcessResult { exit_code: None });
        }
        self.spawn(invocation)
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true, false);
        assert!(runner.debug);
        assert!(!runner.is_dry_run());

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
    }

    #[test]
    fn test_invocation_display_hides_stdin() {
        let inv = Invocation::new("docker", ["login", "-u", "alice", "--password-stdin"])
            .with_stdin("hunter2");
        let shown = inv.to_string();
        assert_eq!(shown, "docker login -u alice --password-stdin < (stdin)");
        assert!(!shown.contains("hunter2"));
        assert!(!format!("{:?}", inv.arg_strs()).contains("hunter2"));

        let debugged = format!("{inv:?}");
        assert!(debugged.contains("<redacted>"));
        assert!(!debugged.contains("hunter2"));
    }

    #[test]
    fn test_run_simple_command() {
        let runner = ProcessRunner::default();
        let result = runner.execute(&Invocation::new("true", Vec::<String>::new()));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().exit_code, Some(0));
    }

    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::default();
        let result = runner.execute(&Invocation::new("false", Vec::<String>::new()));

        if let Err(AutomationError::Process {
            command, exit_code, ..
        }) = result
        {
            assert_eq!(command, "false");
            assert_eq!(exit_code, Some(1));
        } else {
            panic!("Expected ProcessError");
        }
    }

    #[test]
    fn test_missing_binary_is_process_error() {
        let runner = ProcessRunner::default();
        let result = runner.execute(&Invocation::new("nonexistent_command_12345", ["ps"]));
        assert!(matches!(
            result,
            Err(AutomationError::Process { exit_code: None, .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_stdin_payload_is_delivered() {
        let runner = ProcessRunner::default();
        let inv = Invocation::new("sh", ["-c", "read line; test \"$line\" = secret"])
            .with_stdin("secret");
        assert!(runner.execute(&inv).is_ok());

        let inv = Invocation::new("sh", ["-c", "read line; test \"$line\" = secret"])
            .with_stdin("other");
        assert!(runner.execute(&inv).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_child_closing_stdin_is_reaped_with_its_exit_code() {
        let runner = ProcessRunner::default();
        let inv = Invocation::new("sh", ["-c", "exec 0<&-; exit 3"]).with_stdin("x".repeat(1 << 20));

        match runner.execute(&inv) {
            Err(AutomationError::Process { exit_code, message, .. }) => {
                assert_eq!(exit_code, Some(3));
                assert!(message.contains("exit code"), "{message}");
            }
            other => panic!("Expected ProcessError, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unread_stdin_on_clean_exit_is_reported() {
        let runner = ProcessRunner::default();
        let inv = Invocation::new("sh", ["-c", "exec 0<&-; exit 0"]).with_stdin("x".repeat(1 << 20));

        match runner.execute(&inv) {
            Err(AutomationError::Process { exit_code, message, .. }) => {
                assert_eq!(exit_code, Some(0));
                assert!(message.starts_with("Failed to write to stdin"), "{message}");
            }
            other => panic!("Expected ProcessError, got {other:?}"),
        }
    }

    #[test]
    fn test_dry_run_does_not_spawn() {
        let runner = ProcessRunner::new(false, true);
        let result = runner
            .execute(&Invocation::new("nonexistent_command_12345", ["x"]))
            .unwrap();
        assert!(result.is_dry_run());
        assert_eq!(result.exit_code, None);
    }

    #[test]
    fn test_command_exists() {
        let runner = ProcessRunner::default();
        assert!(runner.command_exists("sh"));
        assert!(!runner.command_exists("nonexistent_command_12345"));
    }
}
