//! # Submissions
//!
//! Wire types for pages of form submissions, and the pagination
//! arithmetic applied after a page has been filtered.

pub mod pagination;
pub mod types;

pub use pagination::{reconcile, PageCounts, PageLimit, DEFAULT_LIMIT};
pub use types::{FilteredPage, Submission, SubmissionComponent, SubmissionsPage};
