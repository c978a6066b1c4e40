//! # Filter Pipeline
//!
//! Validator, engine and reconciler run end to end over one fetched page.

use crate::filter::{self, FilterResult, RawFilterParam};
use crate::submissions::{FilteredPage, PageLimit, SubmissionsPage};

/// Validate `raw` and apply it to `page`.
///
/// Nothing is produced for the page when validation fails.
pub fn filter_page(
    raw: &RawFilterParam,
    page: SubmissionsPage,
    limit: PageLimit,
) -> FilterResult<FilteredPage> {
    let filters = filter::validate(raw)?;
    Ok(filter::apply(page, &filters, limit))
}
