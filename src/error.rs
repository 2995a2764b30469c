//! Error types for the automation dispatcher
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the dispatcher
#[derive(Error, Debug)]
pub enum AutomationError {
    /// Process spawn failures and non-zero exits
    #[error("{command} failed: {message}")]
    Process {
        command: String,
        exit_code: Option<i32>,
        message: String,
    },

    /// Reading an answer from the console failed
    #[error("Failed to read input for '{prompt}'")]
    Input {
        prompt: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the console failed
    #[error("Failed to write to console")]
    Output(#[source] std::io::Error),

    /// Standard input reached end of file
    #[error("Input closed")]
    InputClosed,

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AutomationError {
    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        message: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            message: message.into(),
        }
    }

    /// Create a new input error
    pub fn input(prompt: impl Into<String>, source: std::io::Error) -> Self {
        Self::Input {
            prompt: prompt.into().trim_end_matches([':', ' ']).to_string(),
            source,
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error means there is no more input to read
    #[must_use]
    pub const fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AutomationError>;
