//! Review backend API client.
//!
//! Two read-only operations back the dashboard: the item list and the
//! aggregate statistics.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::models::{ItemsParams, ItemsResponse, StatsSummary};
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client for the review backend.
///
/// Cheap to clone; fetch tasks each take their own copy.
#[derive(Clone)]
pub struct LensClient {
    /// Base URL without trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for LensClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LensClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl LensClient {
    /// Create a client against [`DEFAULT_API_URL`].
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, http)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// URL for `GET /api/items` with the given parameters.
    pub fn items_url(&self, params: &ItemsParams) -> String {
        format!("{}/api/items{}", self.base_url, params.query_string())
    }

    /// URL for `GET /api/stats`.
    pub fn stats_url(&self) -> String {
        format!("{}/api/stats", self.base_url)
    }

    /// Fetch the item list.
    pub async fn get_items(&self, params: &ItemsParams) -> ApiResult<ItemsResponse> {
        self.get_json(&self.items_url(params)).await
    }

    /// Fetch aggregate statistics.
    pub async fn get_stats(&self) -> ApiResult<StatsSummary> {
        self.get_json(&self.stats_url()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!("GET {}", url);
        let response = self.http.get(url, &headers).await?;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Server {
                status: response.status,
                message,
            });
        }

        Ok(response.json()?)
    }
}
