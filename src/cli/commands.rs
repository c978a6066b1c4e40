//! CLI command implementations

use std::path::Path;

use crate::filter::RawFilterParam;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::pipeline::filter_page;
use crate::submissions::PageLimit;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_page, write_json};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Filter { filters, limit } => filter(&filters, limit),
    }
}

/// Start the HTTP server
///
/// The configuration file is optional; without one every setting takes
/// its default and the upstream URL comes from the environment.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };
    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::from_config(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Filter a page from stdin and print the result
pub fn filter(filters: &str, limit: Option<u64>) -> CliResult<()> {
    let limit = resolve_limit(limit)?;
    let page = read_page()?;
    let filtered = filter_page(&RawFilterParam::from(filters), page, limit)?;
    write_json(&filtered)
}

fn resolve_limit(limit: Option<u64>) -> CliResult<PageLimit> {
    match limit {
        Some(n) => PageLimit::new(n)
            .ok_or_else(|| CliError::invalid_input("limit must be at least 1")),
        None => Ok(PageLimit::default()),
    }
}
