//! JSON I/O handling for the `filter` command
//!
//! - Input: one submissions page as JSON on stdin
//! - Output: the filtered page as one JSON line on stdout

use std::io::{self, Read, Write};

use serde::Serialize;

use crate::submissions::SubmissionsPage;

use super::errors::{CliError, CliResult};

/// Read a submissions page from stdin
pub fn read_page() -> CliResult<SubmissionsPage> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_page(&input)
}

fn parse_page(input: &str) -> CliResult<SubmissionsPage> {
    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }
    Ok(serde_json::from_str(input)?)
}

/// Write a value to stdout as one JSON line
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
