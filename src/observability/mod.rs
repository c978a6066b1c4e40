//! Observability for the filter service
//!
//! Structured JSON logging, one line per event.
//!
//! # Usage
//!
//! ```ignore
//! use filtered_responses::observability::{Logger, RequestLog};
//!
//! Logger::info("SERVER_STARTING", &[("addr", "0.0.0.0:3000")]);
//!
//! let log = RequestLog::new("form-1");
//! log.warn("FILTERS_REJECTED", &[("reason", "clause 0: unrecognized condition")]);
//! ```

mod logger;

pub use logger::{Logger, RequestLog, Severity};
