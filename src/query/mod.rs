//! Cache-keyed query state for the dashboard's two fetches.
//!
//! The cache does no I/O. The app asks [`QueryCache::should_fetch`] whenever a
//! key becomes active, spawns the request itself, and feeds the outcome back
//! through [`QueryCache::resolve`]. Results are always stored under the key
//! they were requested for, so a late response for an old filter can never
//! replace what is on screen for the current one.

mod key;
mod retry;

pub use key::QueryKey;
pub use retry::RetryPolicy;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::{ApiError, ApiResult};
use crate::models::{ItemsResponse, StatsSummary};
use crate::view_state::FilterState;

/// Inactive entries are dropped after this long without use (5 minutes)
const DEFAULT_GC_TIME_SECS: u64 = 5 * 60;

/// Payload of a resolved query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Items(ItemsResponse),
    Stats(StatsSummary),
}

/// Whether a request for an entry is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    /// A request is in flight or a retry is scheduled
    Fetching,
}

/// Everything known about one cache key.
#[derive(Debug, Clone)]
pub struct QueryState {
    /// Last successful payload, kept across failed refetches
    pub data: Option<QueryData>,
    /// Terminal error of the latest fetch (retries exhausted or not retryable)
    pub error: Option<ApiError>,
    pub fetch_status: FetchStatus,
    /// Consecutive failures of the current fetch
    pub failure_count: u32,
    /// When `data` was last written; `None` after invalidation
    pub updated_at: Option<Instant>,
    last_used: Instant,
}

impl QueryState {
    fn new(now: Instant) -> Self {
        Self {
            data: None,
            error: None,
            fetch_status: FetchStatus::Idle,
            failure_count: 0,
            updated_at: None,
            last_used: now,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_status == FetchStatus::Fetching
    }

    /// No data yet and no terminal error.
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }
}

/// What the caller should do after [`QueryCache::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Data stored
    Settled,
    /// Schedule another attempt after `delay`
    Retry { delay: Duration, attempt: u32 },
    /// Gave up; the error is stored on the entry
    Failed(ApiError),
}

/// Tunables for the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// How long data counts as fresh; fresh data is not refetched on activation
    pub stale_time: Duration,
    /// How long an unused entry survives before garbage collection
    pub gc_time: Duration,
    pub retry: RetryPolicy,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::ZERO,
            gc_time: Duration::from_secs(DEFAULT_GC_TIME_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

/// Explicit, injectable query cache keyed by [`QueryKey`].
#[derive(Debug, Default)]
pub struct QueryCache {
    config: QueryConfig,
    entries: HashMap<QueryKey, QueryState>,
}

impl QueryCache {
    pub fn new(config: QueryConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn get(&self, key: &QueryKey) -> Option<&QueryState> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached items for a filter, if that key has resolved at least once.
    pub fn items(&self, filter: FilterState) -> Option<&ItemsResponse> {
        match self.entries.get(&QueryKey::Items(filter))?.data.as_ref()? {
            QueryData::Items(items) => Some(items),
            QueryData::Stats(_) => None,
        }
    }

    pub fn stats(&self) -> Option<&StatsSummary> {
        match self.entries.get(&QueryKey::Stats)?.data.as_ref()? {
            QueryData::Stats(stats) => Some(stats),
            QueryData::Items(_) => None,
        }
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(QueryState::is_fetching)
    }

    /// Whether activating `key` at `now` should issue a request.
    ///
    /// False while a request for the key is outstanding and while its data is
    /// still fresh.
    pub fn should_fetch(&self, key: &QueryKey, now: Instant) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return true;
        };
        if entry.is_fetching() {
            return false;
        }
        match (entry.data.is_some(), entry.updated_at) {
            (true, Some(updated_at)) => now.duration_since(updated_at) >= self.config.stale_time,
            _ => true,
        }
    }

    /// Mark `key` as in flight.
    ///
    /// An entry that previously failed without data drops its error so the
    /// screen goes back to showing the loading state.
    pub fn begin_fetch(&mut self, key: QueryKey, now: Instant) {
        let entry = self
            .entries
            .entry(key)
            .or_insert_with(|| QueryState::new(now));
        entry.fetch_status = FetchStatus::Fetching;
        entry.failure_count = 0;
        entry.last_used = now;
        if entry.data.is_none() {
            entry.error = None;
        }
    }

    /// Record the outcome of a request for `key`.
    pub fn resolve(
        &mut self,
        key: QueryKey,
        result: ApiResult<QueryData>,
        now: Instant,
    ) -> FetchOutcome {
        let retry = self.config.retry;
        let entry = self
            .entries
            .entry(key)
            .or_insert_with(|| QueryState::new(now));

        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
                entry.failure_count = 0;
                entry.updated_at = Some(now);
                entry.fetch_status = FetchStatus::Idle;
                FetchOutcome::Settled
            }
            Err(err) => {
                entry.failure_count += 1;
                if err.is_retryable() && retry.allows(entry.failure_count) {
                    let attempt = entry.failure_count;
                    FetchOutcome::Retry {
                        delay: retry.delay(attempt - 1),
                        attempt,
                    }
                } else {
                    entry.error = Some(err.clone());
                    entry.fetch_status = FetchStatus::Idle;
                    FetchOutcome::Failed(err)
                }
            }
        }
    }

    /// Mark `key` stale so the next activation refetches it. Data is kept.
    pub fn invalidate(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.updated_at = None;
        }
    }

    /// Record that `key` is on screen at `now`.
    pub fn touch(&mut self, key: &QueryKey, now: Instant) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_used = now;
        }
    }

    /// Drop idle entries unused for longer than `gc_time`, except `keep`.
    ///
    /// Returns the number of evicted entries.
    pub fn collect_garbage(&mut self, now: Instant, keep: &[QueryKey]) -> usize {
        let gc_time = self.config.gc_time;
        let before = self.entries.len();
        self.entries.retain(|key, entry| {
            keep.contains(key)
                || entry.is_fetching()
                || now.duration_since(entry.last_used) < gc_time
        });
        before - self.entries.len()
    }
}
