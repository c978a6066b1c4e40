//! filtered-responses - A filtering overlay for paginated form submission APIs
//!
//! A page of submissions is fetched from an upstream forms API, narrowed by
//! client-supplied filter clauses over question values, and returned with
//! its total/page counts adjusted for the removed records.

pub mod cli;
pub mod filter;
pub mod http_server;
pub mod observability;
pub mod pipeline;
pub mod submissions;
pub mod upstream;
