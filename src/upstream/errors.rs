//! # Upstream Errors

use thiserror::Error;

/// Result type for upstream calls
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Failures reaching or reading the upstream submissions API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status}")]
    Status {
        status: u16,
        body: String,
        content_type: Option<String>,
    },

    /// Request never completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not a submissions page
    #[error("Invalid upstream response: {0}")]
    Decode(String),

    /// Client could not be constructed
    #[error("Upstream configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            UpstreamError::Decode(e.to_string())
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}
