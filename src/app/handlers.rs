//! Message handling for the App.

use std::time::Instant;

use super::{App, AppMessage};
use crate::query::{FetchOutcome, QueryKey};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::QueryResolved { key, result } => {
                let outcome = self.queries.resolve(key, result, Instant::now());
                match outcome {
                    FetchOutcome::Settled => {
                        tracing::debug!("{} resolved", key);
                    }
                    FetchOutcome::Retry { delay, attempt } => {
                        tracing::warn!(
                            "{} failed (attempt {}), retrying in {:?}",
                            key,
                            attempt,
                            delay
                        );
                        self.schedule_retry(key, delay);
                    }
                    FetchOutcome::Failed(error) if key == QueryKey::Stats => {
                        tracing::warn!("Stats unavailable, showing defaults: {}", error);
                    }
                    FetchOutcome::Failed(error) => {
                        tracing::error!("{} failed: {}", key, error);
                    }
                }
                // Only results for what is on screen need a redraw
                if self.active_keys().contains(&key) {
                    self.mark_dirty();
                }
            }
            AppMessage::RetryDue { key } => {
                if self.queries.is_fetching(&key) {
                    self.spawn_request(key);
                }
            }
        }
    }
}
