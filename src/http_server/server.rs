//! # HTTP Server
//!
//! Axum server exposing the filtered responses route in front of an
//! upstream submissions API.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::upstream::{HttpSubmissionsSource, SubmissionsSource};

use super::config::HttpServerConfig;
use super::errors::ConfigResult;
use super::filter_routes::{filter_routes, FilterState};
use super::health_routes::health_routes;

/// HTTP server for the filter service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server that fetches from the configured upstream API
    pub fn from_config(config: HttpServerConfig) -> ConfigResult<Self> {
        let base_url = config.resolve_upstream_base_url()?;
        let source = HttpSubmissionsSource::new(base_url, config.accept_invalid_certs)?;
        Self::with_source(config, Arc::new(source))
    }

    /// Create a server over any submissions source
    pub fn with_source(
        config: HttpServerConfig,
        source: Arc<dyn SubmissionsSource>,
    ) -> ConfigResult<Self> {
        let state = Arc::new(FilterState::new(source, config.page_limit()?));
        let router = Self::build_router(&config, state);
        Ok(Self { config, router })
    }

    fn build_router(config: &HttpServerConfig, state: Arc<FilterState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/api", filter_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Logger::info(
            "SERVER_STARTING",
            &[
                ("addr", addr.to_string().as_str()),
                ("route", "/api/forms/:form_id/filteredResponses"),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_server::errors::ConfigError;
    use crate::upstream::InMemorySubmissionsSource;

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::with_source(
            HttpServerConfig::with_port(8080),
            Arc::new(InMemorySubmissionsSource::new()),
        )
        .unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_from_config_uses_configured_upstream() {
        let config = HttpServerConfig {
            upstream_base_url: Some("https://forms.example.com".to_string()),
            ..Default::default()
        };
        assert!(HttpServer::from_config(config).is_ok());
    }

    #[test]
    fn test_zero_default_limit_rejected() {
        let config = HttpServerConfig {
            default_limit: 0,
            ..Default::default()
        };
        let result = HttpServer::with_source(config, Arc::new(InMemorySubmissionsSource::new()));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
