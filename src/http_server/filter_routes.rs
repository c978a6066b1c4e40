//! Filtered Responses Route
//!
//! `GET /forms/:form_id/filteredResponses` fetches one page of a form's
//! submissions from the upstream API and returns only the submissions that
//! match the `filters` query parameter.
//!
//! `filters` is consumed here. Every other query parameter, `limit`
//! included, is forwarded to the upstream request along with the caller's
//! Authorization header.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap},
    routing::get,
    Json, Router,
};

use crate::filter::{self, FilterError, FilterSet, RawFilterParam};
use crate::observability::RequestLog;
use crate::submissions::{FilteredPage, PageLimit};
use crate::upstream::{SubmissionsSource, UpstreamQuery};

use super::errors::{ApiError, ApiResult};

const FILTERS_PARAM: &str = "filters";
const LIMIT_PARAM: &str = "limit";

// ==================
// Shared State
// ==================

/// State shared by the filter handlers
pub struct FilterState {
    pub source: Arc<dyn SubmissionsSource>,
    pub default_limit: PageLimit,
}

impl FilterState {
    pub fn new(source: Arc<dyn SubmissionsSource>, default_limit: PageLimit) -> Self {
        Self {
            source,
            default_limit,
        }
    }
}

/// Create filter routes
pub fn filter_routes(state: Arc<FilterState>) -> Router {
    Router::new()
        .route(
            "/forms/:form_id/filteredResponses",
            get(filtered_responses_handler),
        )
        .with_state(state)
}

// ==================
// Request Parsing
// ==================

/// Validated inputs of one filter request
#[derive(Debug)]
struct FilterRequest {
    filters: FilterSet,
    limit: PageLimit,
    upstream: UpstreamQuery,
}

impl FilterRequest {
    fn parse(
        form_id: &str,
        params: Vec<(String, String)>,
        headers: &HeaderMap,
        default_limit: PageLimit,
    ) -> Result<Self, FilterError> {
        let (occurrences, forwarded): (Vec<_>, Vec<_>) = params
            .into_iter()
            .partition(|(key, _)| key == FILTERS_PARAM);
        let occurrences = occurrences.into_iter().map(|(_, value)| value).collect();

        let raw = match RawFilterParam::from_occurrences(occurrences) {
            Some(raw) if !form_id.trim().is_empty() => raw,
            _ => return Err(FilterError::Missing),
        };
        let filters = filter::validate(&raw)?;

        let limit = match forwarded.iter().find(|(key, _)| key == LIMIT_PARAM) {
            Some((_, value)) => PageLimit::parse(value)
                .ok_or_else(|| FilterError::InvalidLimit(value.clone()))?,
            None => default_limit,
        };

        Ok(Self {
            filters,
            limit,
            upstream: UpstreamQuery::new(forwarded, forwarded_authorization(headers)),
        })
    }
}

/// Authorization header values, joined when repeated
fn forwarded_authorization(headers: &HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(AUTHORIZATION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

// ==================
// Handlers
// ==================

async fn filtered_responses_handler(
    State(state): State<Arc<FilterState>>,
    Path(form_id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> ApiResult<Json<FilteredPage>> {
    let log = RequestLog::new(&form_id);

    let request = FilterRequest::parse(&form_id, params, &headers, state.default_limit)
        .map_err(|e| {
            log.warn("FILTERS_REJECTED", &[("reason", e.detail().as_str())]);
            ApiError::from(e)
        })?;

    let page = state
        .source
        .fetch_page(&form_id, &request.upstream)
        .await
        .map_err(|e| {
            log.error("UPSTREAM_FAILED", &[("error", e.to_string().as_str())]);
            ApiError::from(e)
        })?;

    let original = page.responses.len();
    let filtered = filter::apply(page, &request.filters, request.limit);

    log.info(
        "FILTERS_APPLIED",
        &[
            ("clauses", request.filters.len().to_string().as_str()),
            ("original", original.to_string().as_str()),
            ("matched", filtered.responses.len().to_string().as_str()),
            ("total_responses", filtered.total_responses.to_string().as_str()),
            ("page_count", filtered.page_count.to_string().as_str()),
        ],
    );

    Ok(Json(filtered))
}
