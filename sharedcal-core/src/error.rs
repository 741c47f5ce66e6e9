//! Error types for sharedcal.

use thiserror::Error;

/// Errors that can occur in sharedcal operations.
#[derive(Error, Debug)]
pub enum SharedCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),
}

impl From<serde_json::Error> for SharedCalError {
    fn from(err: serde_json::Error) -> Self {
        SharedCalError::Serialization(err.to_string())
    }
}

/// Result type alias for sharedcal operations.
pub type SharedCalResult<T> = Result<T, SharedCalError>;
