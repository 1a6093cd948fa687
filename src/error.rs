//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can raise before they are turned into a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Bad phone digits, bad date text, or missing required input.
    /// The message is shown to the user verbatim.
    #[error("{0}")]
    InvalidFormat(String),

    /// Unknown contact name or phone number
    #[error("{0}")]
    NotFound(String),

    /// A positional argument the handler indexes into is absent
    #[error("An unexpected error occurred: {command} expects {expected} argument(s), got {got}")]
    MissingArgument {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::InvalidFormat(err.user_message().to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
