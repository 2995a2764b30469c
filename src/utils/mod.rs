//! Utility modules for common functionality
//!
//! Provides process execution and console prompting.

pub mod process;
pub mod prompt;

pub use process::{CommandExecutor, Invocation, ProcessResult, ProcessRunner};
pub use prompt::{ConsolePrompt, Prompter};
