//! # Pagination Reconciliation
//!
//! Only the fetched page is ever filtered. The adjusted total assumes every
//! unfetched page would lose nothing to the same filters, so the counts are
//! exact when the collection fits in one page and an approximation otherwise.

use std::num::NonZeroU64;

/// Page size used when the caller gives none
pub const DEFAULT_LIMIT: u64 = 150;

const DEFAULT_PAGE_LIMIT: NonZeroU64 = match NonZeroU64::new(DEFAULT_LIMIT) {
    Some(limit) => limit,
    None => panic!("default limit must be nonzero"),
};

/// Page size used to derive the page count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit(NonZeroU64);

impl PageLimit {
    /// Create a limit; zero is not a page size
    pub fn new(limit: u64) -> Option<Self> {
        NonZeroU64::new(limit).map(PageLimit)
    }

    /// Parse a `limit` query parameter
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().and_then(Self::new)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        PageLimit(DEFAULT_PAGE_LIMIT)
    }
}

/// Collection counts after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCounts {
    pub total_responses: u64,
    pub page_count: u64,
}

/// Recompute collection counts after `original_len - filtered_len` records
/// were removed from the fetched page
pub fn reconcile(
    original_total: u64,
    original_len: usize,
    filtered_len: usize,
    limit: PageLimit,
) -> PageCounts {
    let removed = original_len.saturating_sub(filtered_len) as u64;
    let total_responses = original_total.saturating_sub(removed);

    PageCounts {
        total_responses,
        page_count: total_responses.div_ceil(limit.get()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(n: u64) -> PageLimit {
        PageLimit::new(n).unwrap()
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(PageLimit::default().get(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(PageLimit::parse("10"), Some(limit(10)));
        assert_eq!(PageLimit::parse("0"), None);
        assert_eq!(PageLimit::parse("-4"), None);
        assert_eq!(PageLimit::parse("ten"), None);
    }

    #[test]
    fn test_removed_records_subtracted() {
        let counts = reconcile(100, 10, 3, limit(10));
        assert_eq!(counts.total_responses, 93);
        assert_eq!(counts.page_count, 10);
    }

    #[test]
    fn test_nothing_removed() {
        let counts = reconcile(42, 20, 20, limit(20));
        assert_eq!(counts.total_responses, 42);
        assert_eq!(counts.page_count, 3);
    }

    #[test]
    fn test_single_page_is_exact() {
        let counts = reconcile(7, 7, 2, limit(150));
        assert_eq!(counts.total_responses, 2);
        assert_eq!(counts.page_count, 1);

        let counts = reconcile(7, 7, 0, limit(150));
        assert_eq!(counts.total_responses, 0);
        assert_eq!(counts.page_count, 0);
    }

    #[test]
    fn test_inconsistent_upstream_total_saturates() {
        let counts = reconcile(2, 5, 0, limit(10));
        assert_eq!(counts.total_responses, 0);
    }
}
