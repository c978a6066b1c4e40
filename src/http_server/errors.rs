//! # HTTP Errors
//!
//! Error types for the filter service and its configuration.

use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::filter::FilterError;
use crate::upstream::UpstreamError;

/// Assumed for proxied upstream bodies sent without a Content-Type
const UPSTREAM_DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the filter route
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing or invalid request input
    #[error("Bad Request: {0}")]
    BadRequest(String),

    // ==================
    // Upstream Errors
    // ==================
    /// Upstream rejected the request; status and body are proxied
    #[error("Upstream returned status {status}")]
    Upstream {
        status: u16,
        body: String,
        content_type: Option<String>,
    },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Upstream unreachable or unreadable
    #[error("Error fetching data")]
    FetchFailed(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status {
                status,
                body,
                content_type,
            } => ApiError::Upstream {
                status,
                body,
                content_type,
            },
            other => ApiError::FetchFailed(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Upstream {
                body, content_type, ..
            } => {
                let content_type =
                    content_type.unwrap_or_else(|| UPSTREAM_DEFAULT_CONTENT_TYPE.to_string());
                (status, [(CONTENT_TYPE, content_type)], body).into_response()
            }
            other => {
                let body = Json(ErrorResponse {
                    message: other.to_string(),
                });
                (status, body).into_response()
            }
        }
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {0}")]
    Read(String),

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("{0}")]
    Upstream(#[from] UpstreamError),
}
