//! Startup configuration types.
//!
//! This module defines the settings the dashboard is launched with.

use std::time::Duration;

use crate::api::DEFAULT_API_URL;
use crate::query::{QueryConfig, RetryPolicy};

/// Environment variable overriding the backend base URL
pub const ENV_API_URL: &str = "LENS_API_URL";
/// Environment variable for the per-request timeout in seconds
pub const ENV_REQUEST_TIMEOUT: &str = "LENS_REQUEST_TIMEOUT_SECS";
/// Environment variable for how long fetched data stays fresh, in seconds
pub const ENV_STALE_SECS: &str = "LENS_STALE_SECS";
/// Environment variable for the number of retries after a failed fetch
pub const ENV_RETRY_LIMIT: &str = "LENS_RETRY_LIMIT";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration for the dashboard.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```
/// use lens::startup::DashboardConfig;
/// use std::time::Duration;
///
/// let config = DashboardConfig::default()
///     .with_api_url("http://review.internal:9000")
///     .with_retry_limit(1);
/// assert_eq!(config.request_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Backend base URL (default: http://localhost:8000)
    pub api_url: String,
    /// Per-request timeout (default: 10s)
    pub request_timeout: Duration,
    /// How long fetched data counts as fresh (default: 0, always refetch on activation)
    pub stale_time: Duration,
    /// Retries after a failed fetch (default: 3)
    pub retry_limit: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            stale_time: Duration::ZERO,
            retry_limit: RetryPolicy::default().limit,
        }
    }
}

impl DashboardConfig {
    /// Create a new DashboardConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set how long fetched data stays fresh.
    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Set the number of retries after a failed fetch.
    pub fn with_retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = limit;
        self
    }

    /// Create config from `LENS_*` environment variables.
    ///
    /// Unset, empty or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = env_string(ENV_API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(secs) = env_parse::<u64>(ENV_REQUEST_TIMEOUT) {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = env_parse::<u64>(ENV_STALE_SECS) {
            config = config.with_stale_time(Duration::from_secs(secs));
        }
        if let Some(limit) = env_parse::<u32>(ENV_RETRY_LIMIT) {
            config = config.with_retry_limit(limit);
        }

        config
    }

    /// Query cache settings derived from this config
    pub fn query_config(&self) -> QueryConfig {
        QueryConfig {
            stale_time: self.stale_time,
            retry: RetryPolicy::default().with_limit(self.retry_limit),
            ..QueryConfig::default()
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env_string(name)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}", name, raw);
            None
        }
    }
}
