use std::sync::Arc;

use axum::{Json, extract::State};
use openhours_core::errors::LocationError;
use serde::Deserialize;
use serde_json::Value;

use crate::{ApiState, extract::AppQuery, middleware::error_handling::AppError};

const DEFAULT_COUNT: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub count: Option<u32>,
}

/// Proxies a web search and returns the upstream body as is.
///
/// # Errors
///
/// * `LocationError::Validation` - `q` is missing or blank
/// * `LocationError::Unavailable` - no search API key is configured
/// * `LocationError::Upstream` - the search API failed
#[axum::debug_handler]
pub async fn web_search(
    State(state): State<Arc<ApiState>>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| LocationError::Validation("Search query is required".to_string()))?;

    let client = state
        .search
        .as_ref()
        .ok_or_else(|| LocationError::Unavailable("Web search is not configured".to_string()))?;

    let body = client.search(q, query.count.unwrap_or(DEFAULT_COUNT)).await?;
    Ok(Json(body))
}
