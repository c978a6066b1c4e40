//! # HTTP Server Module
//!
//! Axum server for the filter service.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/forms/:form_id/filteredResponses` - One page of submissions,
//!   filtered by the `filters` query parameter
//!
//! `totalResponses` and `pageCount` in a filtered page are exact only when
//! the form's submissions fit in a single page. Otherwise they assume the
//! pages that were not fetched lose nothing to the filters.

pub mod config;
pub mod errors;
pub mod filter_routes;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ConfigError, ConfigResult};
pub use filter_routes::{filter_routes, FilterState};
pub use server::HttpServer;
