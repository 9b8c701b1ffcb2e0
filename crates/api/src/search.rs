//! HTTP client for the third-party web search API.
//!
//! The proxy is a pass-through: the request gets the subscription key and a
//! fixed set of query parameters, and the upstream JSON body is returned
//! untouched.

use std::time::Duration;

use openhours_core::errors::{LocationError, LocationResult};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.bing.microsoft.com/v7.0";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Client for the web search API.
///
/// Use [`SearchClient::new`] for production or [`SearchClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl SearchClient {
    pub fn new(api_key: &str, timeout_secs: u64) -> LocationResult<Self> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`LocationError::Internal`] if the `reqwest::Client` cannot be
    /// built or `base_url` does not parse.
    pub fn with_base_url(api_key: &str, timeout_secs: u64, base_url: &str) -> LocationResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| LocationError::Internal(Box::new(e)))?;

        // Trailing slash so that joining "search" appends a segment instead of
        // replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| LocationError::Internal(Box::new(e)))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs a web page search and returns the raw response body.
    ///
    /// # Errors
    ///
    /// [`LocationError::Upstream`] on transport failure, a non-2xx status, or
    /// a body that is not JSON.
    pub async fn search(&self, query: &str, count: u32) -> LocationResult<Value> {
        let url = self
            .base_url
            .join("search")
            .map_err(|e| LocationError::Internal(Box::new(e)))?;
        let count = count.to_string();

        debug!(query, "Forwarding web search");
        let response = self
            .client
            .get(url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .query(&[
                ("q", query),
                ("count", count.as_str()),
                ("responseFilter", "Webpages"),
                ("textDecorations", "true"),
                ("textFormat", "HTML"),
            ])
            .send()
            .await
            .map_err(|e| LocationError::Upstream(format!("search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Search API returned an error status");
            return Err(LocationError::Upstream(format!(
                "search API returned {status}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LocationError::Upstream(format!("invalid search response: {e}")))
    }
}
