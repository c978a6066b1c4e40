//! In-memory submissions source
//!
//! Serves fixed pages without a network, for tests and for embedding the
//! filter route in front of data that is already loaded.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::submissions::SubmissionsPage;

use super::errors::{UpstreamError, UpstreamResult};
use super::source::{SubmissionsSource, UpstreamQuery};

/// Submissions source backed by a map of form id to page
#[derive(Debug, Default)]
pub struct InMemorySubmissionsSource {
    pages: RwLock<HashMap<String, SubmissionsPage>>,
    last_request: Mutex<Option<(String, UpstreamQuery)>>,
}

impl InMemorySubmissionsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `page` for `form_id`
    pub fn with_page(self, form_id: impl Into<String>, page: SubmissionsPage) -> Self {
        self.insert(form_id, page);
        self
    }

    pub fn insert(&self, form_id: impl Into<String>, page: SubmissionsPage) {
        if let Ok(mut pages) = self.pages.write() {
            pages.insert(form_id.into(), page);
        }
    }

    /// Form id and query of the most recent fetch
    pub fn last_request(&self) -> Option<(String, UpstreamQuery)> {
        self.last_request.lock().ok().and_then(|last| last.clone())
    }
}

#[async_trait]
impl SubmissionsSource for InMemorySubmissionsSource {
    async fn fetch_page(
        &self,
        form_id: &str,
        query: &UpstreamQuery,
    ) -> UpstreamResult<SubmissionsPage> {
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some((form_id.to_string(), query.clone()));
        }

        let pages = self
            .pages
            .read()
            .map_err(|_| UpstreamError::Transport("lock poisoned".to_string()))?;

        pages.get(form_id).cloned().ok_or_else(|| UpstreamError::Status {
            status: 404,
            body: r#"{"message":"Form not found"}"#.to_string(),
            content_type: Some("application/json".to_string()),
        })
    }
}
