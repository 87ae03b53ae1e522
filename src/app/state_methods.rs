//! Query orchestration for the App.
//!
//! Requests run on spawned tasks and report back through `message_tx`; the
//! cache is only ever touched from the main loop.

use std::time::Instant;

use super::{App, AppMessage};
use crate::query::{QueryData, QueryKey};
use crate::view_state::FilterState;

impl App {
    /// Start the initial stats and items fetches
    pub fn mount(&mut self) {
        tracing::info!("Mounting dashboard against {}", self.client.base_url);
        self.fetch(QueryKey::Stats);
        self.fetch(self.items_key());
    }

    /// Switch the active filter.
    ///
    /// Selecting the filter that is already active does nothing. Otherwise the
    /// list scrolls back to the top and the new key is fetched unless its
    /// cached data is still fresh or a request is already outstanding.
    pub fn set_filter(&mut self, filter: FilterState) {
        if filter == self.filter {
            return;
        }
        tracing::debug!("Filter {} -> {}", self.filter.key(), filter.key());

        let now = Instant::now();
        self.queries.touch(&self.items_key(), now);
        self.filter = filter;
        self.scroll_offset = 0;
        self.mark_dirty();
        self.fetch(self.items_key());
    }

    /// Move to the next (`forward`) or previous filter
    pub fn cycle_filter(&mut self, forward: bool) {
        let filter = if forward {
            self.filter.next()
        } else {
            self.filter.prev()
        };
        self.set_filter(filter);
    }

    /// Mark the visible queries stale and refetch them
    pub fn refresh(&mut self) {
        tracing::debug!("Manual refresh");
        for key in self.active_keys() {
            self.queries.invalidate(&key);
            self.fetch(key);
        }
        self.mark_dirty();
    }

    /// Fetch `key` unless it is fresh or already in flight
    pub fn fetch(&mut self, key: QueryKey) {
        let now = Instant::now();
        if !self.queries.should_fetch(&key, now) {
            self.queries.touch(&key, now);
            return;
        }
        self.queries.begin_fetch(key, now);
        self.spawn_request(key);
    }

    /// Issue the HTTP request for `key` on a background task
    pub(crate) fn spawn_request(&self, key: QueryKey) {
        let tx = self.message_tx.clone();
        let client = self.client.clone();
        tracing::debug!("Requesting {}", key);
        tokio::spawn(async move {
            let result = match key {
                QueryKey::Items(filter) => client
                    .get_items(&filter.items_params())
                    .await
                    .map(QueryData::Items),
                QueryKey::Stats => client.get_stats().await.map(QueryData::Stats),
            };
            let _ = tx.send(AppMessage::QueryResolved { key, result });
        });
    }

    /// Schedule another attempt for `key` after `delay`
    pub(crate) fn schedule_retry(&self, key: QueryKey, delay: std::time::Duration) {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppMessage::RetryDue { key });
        });
    }

    /// Scroll the item list up by `lines` cards
    pub fn scroll_up(&mut self, lines: usize) {
        let offset = self.scroll_offset.saturating_sub(lines);
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.mark_dirty();
        }
    }

    /// Scroll the item list down by `lines` cards, stopping at the last page
    pub fn scroll_down(&mut self, lines: usize) {
        use crate::ui::dashboard::item_list::{max_scroll, visible_capacity};

        let total = self
            .queries
            .items(self.filter)
            .map_or(0, |response| response.items.len());
        let max = max_scroll(total, visible_capacity(self.viewport_height));
        let offset = (self.scroll_offset + lines).min(max);
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.mark_dirty();
        }
    }
}
