//! CLI module
//!
//! Provides command-line interface for:
//! - serve: run the HTTP filter service
//! - filter: one-shot filtering of a page read from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{filter, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
