//! Common test utilities for integration tests.
//!
//! Builds an [`App`] wired to a [`MockHttpClient`], pumps its message channel,
//! and renders it into a `TestBackend` so tests can assert on screen text.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use lens::adapters::{MockHttpClient, MockResponse};
use lens::api::LensClient;
use lens::app::{App, AppMessage};
use lens::query::{QueryConfig, RetryPolicy};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

pub const BASE_URL: &str = "http://lens.test";
pub const ITEMS_URL: &str = "http://lens.test/api/items";
pub const PENDING_URL: &str = "http://lens.test/api/items?status=pending_review";
pub const STATS_URL: &str = "http://lens.test/api/stats";

/// Cache settings with millisecond backoff so retry tests stay fast
pub fn fast_retry_config(limit: u32) -> QueryConfig {
    QueryConfig {
        retry: RetryPolicy::default()
            .with_limit(limit)
            .with_base_delay(Duration::from_millis(5)),
        ..QueryConfig::default()
    }
}

/// An app against [`BASE_URL`] plus the receiver for its background messages
pub fn test_app(http: &MockHttpClient, config: QueryConfig) -> (App, UnboundedReceiver<AppMessage>) {
    let client = LensClient::with_base_url(BASE_URL, Arc::new(http.clone()));
    let mut app = App::new(client, config);
    let rx = app
        .message_rx
        .take()
        .expect("new app owns its receiver");
    (app, rx)
}

/// JSON body for `GET /api/items`
pub fn items_body(items: &[(&str, &str)]) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|(id, title)| json!({ "id": id, "title": title }))
        .collect();
    json!({ "items": items })
}

/// Mock that answers every endpoint: all items, pending items and stats
pub fn mock_backend(all: &[(&str, &str)], pending: &[(&str, &str)], stats: Value) -> MockHttpClient {
    let http = MockHttpClient::new();
    http.set_response(ITEMS_URL, MockResponse::json(items_body(all)));
    http.set_response(PENDING_URL, MockResponse::json(items_body(pending)));
    http.set_response(STATS_URL, MockResponse::json(stats));
    http
}

/// Feed the next `count` background messages into the app
pub async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, count: usize) {
    for _ in 0..count {
        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for a background message")
            .expect("message channel closed");
        app.handle_message(msg);
    }
}

/// Render the app and return each screen row as a string
pub fn render_rows(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| lens::ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

/// Render the app and return the whole screen as one string
pub fn render_text(app: &mut App, width: u16, height: u16) -> String {
    render_rows(app, width, height).join("\n")
}
