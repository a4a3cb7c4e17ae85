//! Error types for taskchat.

use thiserror::Error;

/// Everything that can go wrong while handling a line of input.
///
/// Parse and range errors are rendered back to the user as the response for
/// that line; they never end the session.
#[derive(Error, Debug)]
pub enum ChatError {
    /// The command keyword was not recognized. Carries the raw line.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// A known command with missing or malformed arguments.
    #[error("Command {command} encountered invalid arguments: {reason}")]
    InvalidArguments { command: String, reason: String },

    /// A 1-based index outside `[1, len]`.
    #[error("Index {index} is out of range, you have {len} tasks in the list")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChatError {
    pub fn invalid_arguments(command: &str, reason: &str) -> Self {
        ChatError::InvalidArguments {
            command: command.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
