//! # Filter Errors
//!
//! Rejections produced while validating a filter expression.

use thiserror::Error;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter validation errors
///
/// Any of these rejects the whole filter set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// No filter expression was supplied
    #[error("Missing required inputs")]
    Missing,

    /// Filter text is not valid JSON
    #[error("{0}")]
    Malformed(String),

    /// Filter JSON is not an array of clauses
    #[error("Invalid filters")]
    NotAnArray,

    /// A clause failed validation
    #[error("Invalid filters")]
    InvalidClause { index: usize, reason: String },

    /// `limit` is not a positive integer
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}

impl FilterError {
    pub(crate) fn clause(index: usize, reason: impl Into<String>) -> Self {
        FilterError::InvalidClause {
            index,
            reason: reason.into(),
        }
    }

    /// Detail suitable for logs
    pub fn detail(&self) -> String {
        match self {
            FilterError::InvalidClause { index, reason } => {
                format!("clause {}: {}", index, reason)
            }
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for FilterError {
    fn from(e: serde_json::Error) -> Self {
        FilterError::Malformed(e.to_string())
    }
}
