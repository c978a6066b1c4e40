//! HTTP client for the upstream forms API

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::submissions::SubmissionsPage;

use super::errors::{UpstreamError, UpstreamResult};
use super::source::{SubmissionsSource, UpstreamQuery};

/// Fetches submission pages from `{base_url}/v1/api/forms/{form_id}/submissions`
#[derive(Debug, Clone)]
pub struct HttpSubmissionsSource {
    client: Client,
    base_url: String,
}

impl HttpSubmissionsSource {
    /// Create a source for the given API base URL.
    ///
    /// `accept_invalid_certs` is meant for local upstreams with
    /// self-signed certificates only.
    pub fn new(base_url: impl Into<String>, accept_invalid_certs: bool) -> UpstreamResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(UpstreamError::Config("upstream base URL is empty".to_string()));
        }

        let client = Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| UpstreamError::Config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Submissions endpoint for a form
    pub fn submissions_url(&self, form_id: &str) -> String {
        format!(
            "{}/v1/api/forms/{}/submissions",
            self.base_url.trim_end_matches('/'),
            form_id
        )
    }
}

#[async_trait]
impl SubmissionsSource for HttpSubmissionsSource {
    async fn fetch_page(
        &self,
        form_id: &str,
        query: &UpstreamQuery,
    ) -> UpstreamResult<SubmissionsPage> {
        let mut request = self
            .client
            .get(self.submissions_url(form_id))
            .query(&query.params);
        if let Some(auth) = &query.authorization {
            request = request.header(AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
                content_type,
            });
        }

        Ok(response.json::<SubmissionsPage>().await?)
    }
}
