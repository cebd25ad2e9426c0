//! Error handling

use reqwest::StatusCode;
use thiserror::Error;

/// Error raised by a single call to the optimizer service
#[derive(Error, Debug)]
pub enum ClientError {
    /// The call did not complete within its timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Connection refused, DNS failure, reset, ...
    #[error("Network error: {0}")]
    Network(String),

    /// Any status other than 200
    #[error("API error: HTTP {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Body could not be decoded into the expected schema
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration rejected before any request was sent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Map a transport error, distinguishing timeouts
    pub(crate) fn from_reqwest(error: reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            ClientError::Timeout(timeout_secs)
        } else if error.is_decode() {
            ClientError::Parse(error.to_string())
        } else {
            ClientError::Network(error.to_string())
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout(_))
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of an API error, pretty-printed when it is JSON
    pub fn api_body_pretty(&self) -> Option<String> {
        match self {
            ClientError::Api { body, .. } => Some(
                serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|value| serde_json::to_string_pretty(&value).ok())
                    .unwrap_or_else(|| body.clone()),
            ),
            _ => None,
        }
    }
}
