//! HTTP Server Configuration
//!
//! Host, port and CORS settings for the filter service, plus how to reach
//! the upstream submissions API. Loaded from a JSON file; every field has a
//! default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::submissions::{PageLimit, DEFAULT_LIMIT};

use super::errors::{ConfigError, ConfigResult};

/// Environment variable consulted when no upstream base URL is configured
pub const UPSTREAM_BASE_URL_ENV: &str = "SECRET_BASE_URL";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Base URL of the upstream forms API
    #[serde(default)]
    pub upstream_base_url: Option<String>,

    /// Accept self-signed upstream certificates (local development only)
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Page size assumed when a request has no `limit`
    #[serde(default = "default_limit")]
    pub default_limit: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            upstream_base_url: None,
            accept_invalid_certs: false,
            default_limit: default_limit(),
        }
    }
}

impl HttpServerConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.page_limit()?;
        Ok(config)
    }

    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default page limit as a validated value
    pub fn page_limit(&self) -> ConfigResult<PageLimit> {
        PageLimit::new(self.default_limit)
            .ok_or_else(|| ConfigError::Invalid("default_limit must be at least 1".to_string()))
    }

    /// Upstream base URL from the config file, else from the environment
    pub fn resolve_upstream_base_url(&self) -> ConfigResult<String> {
        self.upstream_base_url
            .clone()
            .or_else(|| std::env::var(UPSTREAM_BASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "upstream_base_url is not set and {} is empty",
                    UPSTREAM_BASE_URL_ENV
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.cors_origins.is_empty());
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.page_limit().unwrap().get(), 150);
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"port": 4000, "upstream_base_url": "https://forms.example.com", "default_limit": 25}}"#
        )
        .unwrap();

        let config = HttpServerConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.page_limit().unwrap().get(), 25);
        assert_eq!(
            config.resolve_upstream_base_url().unwrap(),
            "https://forms.example.com"
        );
    }

    #[test]
    fn test_load_rejects_zero_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_limit": 0}}"#).unwrap();

        assert!(matches!(
            HttpServerConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = HttpServerConfig::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
