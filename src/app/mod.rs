//! Application state and logic for the TUI.
//!
//! [`App`] owns the active filter, the query cache and the channel that
//! background fetch tasks report back on. Rendering only ever sees a
//! [`RenderContext`] built from it.

mod handlers;
mod messages;
mod navigation;
mod state_methods;

pub use messages::AppMessage;

use tokio::sync::mpsc;

use crate::api::LensClient;
use crate::query::{QueryCache, QueryConfig, QueryKey};
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::{FilterState, ItemsRegion, RenderContext, Theme};

/// Main loop ticks per spinner frame (16ms ticks, ~100ms per frame)
pub const SPINNER_TICKS_PER_FRAME: u64 = 6;

/// Main loop ticks between cache garbage collection passes (~1s)
pub const GC_INTERVAL_TICKS: u64 = 60;

/// Main application state
pub struct App {
    /// Review backend client, cloned into each fetch task
    pub client: LensClient,
    /// Active filter
    pub filter: FilterState,
    /// Items and stats query cache
    pub queries: QueryCache,
    /// Index of the first visible item card
    pub scroll_offset: usize,
    /// Rows the item list had on the last render
    pub viewport_height: u16,
    /// Flag to indicate the app should quit
    pub should_quit: bool,
    /// Animation frame counter
    pub tick_count: u64,
    /// Whether the UI needs to be redrawn on the next loop iteration
    pub needs_redraw: bool,
    /// Clickable regions from the last render
    pub hit_areas: HitAreaRegistry,
    pub theme: Theme,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver; taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create a new App with the given backend client and cache settings
    pub fn new(client: LensClient, config: QueryConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            client,
            filter: FilterState::default(),
            queries: QueryCache::new(config),
            scroll_offset: 0,
            viewport_height: 0,
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
            hit_areas: HitAreaRegistry::new(),
            theme: Theme::default(),
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Cache key of the item list currently on screen
    pub fn items_key(&self) -> QueryKey {
        QueryKey::Items(self.filter)
    }

    /// Keys that must survive garbage collection
    pub fn active_keys(&self) -> [QueryKey; 2] {
        [QueryKey::Stats, self.items_key()]
    }

    /// A visible query is refetching while older data is on screen
    pub fn is_refreshing(&self) -> bool {
        self.active_keys().iter().any(|key| {
            self.queries
                .get(key)
                .is_some_and(|state| state.is_fetching() && state.data.is_some())
        })
    }

    /// Something on screen is animating
    fn is_animating(&self) -> bool {
        self.is_refreshing()
            || self
                .queries
                .get(&self.items_key())
                .map_or(true, |state| state.is_loading())
    }

    /// Increment the tick counter for animations and collect unused cache entries
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.tick_count % SPINNER_TICKS_PER_FRAME == 0 && self.is_animating() {
            self.mark_dirty();
        }

        if self.tick_count % GC_INTERVAL_TICKS == 0 {
            let keep = self.active_keys();
            let evicted = self
                .queries
                .collect_garbage(std::time::Instant::now(), &keep);
            if evicted > 0 {
                tracing::debug!("Evicted {} unused cache entries", evicted);
            }
        }
    }

    /// Build the render context for the current state
    pub fn render_context(&self) -> RenderContext<'_> {
        let items_state = self.queries.get(&self.items_key());
        let background_error = items_state
            .filter(|state| state.data.is_some())
            .and_then(|state| state.error.as_ref())
            .map(|error| error.user_message());

        RenderContext::new(&self.theme)
            .with_filter(self.filter)
            .with_stats(self.queries.stats())
            .with_items(ItemsRegion::from_query(items_state))
            .with_scroll_offset(self.scroll_offset)
            .with_tick(self.tick_count / SPINNER_TICKS_PER_FRAME)
            .with_refreshing(self.is_refreshing())
            .with_background_error(background_error)
    }
}
