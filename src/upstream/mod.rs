//! # Upstream Submissions API
//!
//! The forms API that owns the submissions is reached through the
//! [`SubmissionsSource`] trait, so the filter route can run against a real
//! HTTP backend or a fixed in-memory page.

pub mod errors;
pub mod http;
pub mod memory;
pub mod source;

pub use errors::{UpstreamError, UpstreamResult};
pub use http::HttpSubmissionsSource;
pub use memory::InMemorySubmissionsSource;
pub use source::{SubmissionsSource, UpstreamQuery};
