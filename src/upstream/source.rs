//! Submissions source trait

use async_trait::async_trait;

use crate::submissions::SubmissionsPage;

use super::errors::UpstreamResult;

/// Request details forwarded to the upstream API
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamQuery {
    /// Query parameters, in request order, minus `filters`
    pub params: Vec<(String, String)>,

    /// Caller's Authorization header, passed through for the upstream to check
    pub authorization: Option<String>,
}

impl UpstreamQuery {
    pub fn new(params: Vec<(String, String)>, authorization: Option<String>) -> Self {
        Self {
            params,
            authorization,
        }
    }
}

/// Anything that can produce one page of a form's submissions
#[async_trait]
pub trait SubmissionsSource: Send + Sync {
    async fn fetch_page(
        &self,
        form_id: &str,
        query: &UpstreamQuery,
    ) -> UpstreamResult<SubmissionsPage>;
}
