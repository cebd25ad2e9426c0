//! Error handling for the harness
//!
//! Errors that reach the process boundary. Failures of individual API calls
//! never get here: the runner reports them and substitutes a sentinel.

use crate::client::ClientError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the harness
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Run from the wrong directory
    #[error("Environment error: {message} (current directory: {})", .dir.display())]
    Environment { message: String, dir: PathBuf },

    /// Invalid CLI or builder configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client construction failures
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The test run itself crashed
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<tokio::task::JoinError> for HarnessError {
    fn from(error: tokio::task::JoinError) -> Self {
        HarnessError::Unexpected(error.to_string())
    }
}

impl HarnessError {
    pub fn environment(message: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        HarnessError::Environment {
            message: message.into(),
            dir: dir.into(),
        }
    }

    /// Whether the failure happened before any network activity
    pub fn is_environment(&self) -> bool {
        matches!(self, HarnessError::Environment { .. })
    }
}
