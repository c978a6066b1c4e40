//! CLI argument definitions using clap
//!
//! Commands:
//! - filtered-responses serve [--config <path>] [--port <port>]
//! - filtered-responses filter --filters <json> [--limit <n>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Filtering overlay for paginated form submission APIs
#[derive(Parser, Debug)]
#[command(name = "filtered-responses")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind to, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Filter one submissions page read from stdin and exit
    Filter {
        /// Encoded JSON array of filter clauses
        #[arg(long)]
        filters: String,

        /// Page size used to recompute the page count
        #[arg(long)]
        limit: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
