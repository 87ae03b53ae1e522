//! Dashboard view state
//!
//! View-only types derived from the app state. Everything the renderer needs
//! is collected into a [`RenderContext`] so that the UI never touches `App`.

use crate::models::{Item, ItemsParams, StatsSummary};
use crate::query::{QueryData, QueryState};

// ============================================================================
// FilterState
// ============================================================================

/// Status value the backend uses for items awaiting review
pub const STATUS_PENDING_REVIEW: &str = "pending_review";

/// The screen's filter toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterState {
    /// Every item
    #[default]
    All,
    /// Items awaiting review
    Pending,
    /// High-risk items. Requests the same unfiltered list as `All`.
    HighRisk,
}

impl FilterState {
    /// All options in display order
    pub const ALL: [FilterState; 3] = [FilterState::All, FilterState::Pending, FilterState::HighRisk];

    /// Stable identifier used in cache keys and logs
    pub fn key(&self) -> &'static str {
        match self {
            FilterState::All => "all",
            FilterState::Pending => "pending",
            FilterState::HighRisk => "high-risk",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            FilterState::All => "All Items",
            FilterState::Pending => "Pending Review",
            FilterState::HighRisk => "High Risk",
        }
    }

    /// Request parameters for the items query under this filter
    pub fn items_params(&self) -> ItemsParams {
        match self {
            FilterState::Pending => ItemsParams::with_status(STATUS_PENDING_REVIEW),
            FilterState::All | FilterState::HighRisk => ItemsParams::unfiltered(),
        }
    }

    /// Position in [`FilterState::ALL`]
    pub fn index(&self) -> usize {
        match self {
            FilterState::All => 0,
            FilterState::Pending => 1,
            FilterState::HighRisk => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Cycle to the next filter state
    pub fn next(&self) -> Self {
        match self {
            FilterState::All => FilterState::Pending,
            FilterState::Pending => FilterState::HighRisk,
            FilterState::HighRisk => FilterState::All,
        }
    }

    /// Cycle to the previous filter state
    pub fn prev(&self) -> Self {
        match self {
            FilterState::All => FilterState::HighRisk,
            FilterState::Pending => FilterState::All,
            FilterState::HighRisk => FilterState::Pending,
        }
    }
}

// ============================================================================
// Stat cards
// ============================================================================

/// Colour tag of a stat card. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Blue,
    Red,
    Yellow,
    Green,
}

/// Everything a stat card needs.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCardView {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub color: ColorTag,
}

impl StatCardView {
    pub fn new(title: &'static str, value: impl ToString, icon: &'static str, color: ColorTag) -> Self {
        Self {
            title,
            value: value.to_string(),
            icon,
            color,
        }
    }
}

/// Build the four stat cards, falling back to placeholders for missing values.
pub fn stat_cards(stats: Option<&StatsSummary>) -> [StatCardView; 4] {
    let stats = stats.copied().unwrap_or_default();
    [
        StatCardView::new("Pending Review", stats.pending_or_default(), "◷", ColorTag::Blue),
        StatCardView::new("High Risk", stats.high_risk_or_default(), "⚠", ColorTag::Red),
        StatCardView::new("Avg Risk Score", stats.avg_risk_display(), "↗", ColorTag::Yellow),
        StatCardView::new("Active Locations", stats.locations_or_default(), "◉", ColorTag::Green),
    ]
}

// ============================================================================
// Items region
// ============================================================================

/// What the item list area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsRegion<'a> {
    /// No result yet for the current key
    Loading,
    /// Gave up without ever getting data for the current key
    Failed { message: String },
    /// Items in the order the backend returned them
    Populated(&'a [Item]),
}

impl<'a> ItemsRegion<'a> {
    /// Derive the region from the current key's cache entry.
    pub fn from_query(state: Option<&'a QueryState>) -> Self {
        let Some(state) = state else {
            return ItemsRegion::Loading;
        };
        match (&state.data, &state.error) {
            (Some(QueryData::Items(response)), _) => ItemsRegion::Populated(&response.items),
            (_, Some(error)) => ItemsRegion::Failed {
                message: error.user_message(),
            },
            _ => ItemsRegion::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ItemsRegion::Loading)
    }

    /// Items to render; empty unless populated
    pub fn items(&self) -> &'a [Item] {
        match self {
            ItemsRegion::Populated(items) => *items,
            _ => &[],
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Theme colors for the dashboard
#[derive(Debug, Clone)]
pub struct Theme {
    /// Active filter button background, spinner
    pub accent: ratatui::style::Color,
    /// Error lines
    pub error: ratatui::style::Color,
    /// Secondary text
    pub dim: ratatui::style::Color,
    /// Card borders
    pub border: ratatui::style::Color,
    /// Header title
    pub header: ratatui::style::Color,
}

impl Default for Theme {
    fn default() -> Self {
        use crate::ui::theme;
        Self {
            accent: theme::COLOR_ACCENT,
            error: theme::COLOR_ERROR,
            dim: theme::COLOR_DIM,
            border: theme::COLOR_BORDER,
            header: theme::COLOR_HEADER,
        }
    }
}

// ============================================================================
// RenderContext
// ============================================================================

/// Complete render context for the dashboard view
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// Active filter
    pub filter: FilterState,
    /// The four stat cards
    pub stat_cards: [StatCardView; 4],
    /// Item list area
    pub items: ItemsRegion<'a>,
    /// Index of the first visible item card
    pub scroll_offset: usize,
    /// Animation frame counter for the spinner
    pub tick: u64,
    /// A visible query is refetching in the background
    pub refreshing: bool,
    /// Failure of a background refetch while older data is on screen
    pub background_error: Option<String>,
    /// Theme colors
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    /// Create a context with default filter, placeholder stats and a loading list.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            filter: FilterState::default(),
            stat_cards: stat_cards(None),
            items: ItemsRegion::Loading,
            scroll_offset: 0,
            tick: 0,
            refreshing: false,
            background_error: None,
            theme,
        }
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_stats(mut self, stats: Option<&StatsSummary>) -> Self {
        self.stat_cards = stat_cards(stats);
        self
    }

    pub fn with_items(mut self, items: ItemsRegion<'a>) -> Self {
        self.items = items;
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset: usize) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_refreshing(mut self, refreshing: bool) -> Self {
        self.refreshing = refreshing;
        self
    }

    pub fn with_background_error(mut self, error: Option<String>) -> Self {
        self.background_error = error;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::ItemsResponse;
    use crate::query::{QueryCache, QueryKey};
    use std::time::Instant;

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<&str> = FilterState::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All Items", "Pending Review", "High Risk"]);
    }

    #[test]
    fn test_items_params_mapping() {
        assert_eq!(FilterState::All.items_params().status, None);
        assert_eq!(
            FilterState::Pending.items_params().status.as_deref(),
            Some("pending_review")
        );
        assert_eq!(FilterState::HighRisk.items_params().status, None);
    }

    #[test]
    fn test_cycle_round_trip() {
        for filter in FilterState::ALL {
            assert_eq!(filter.next().prev(), filter);
            assert_eq!(FilterState::from_index(filter.index()), Some(filter));
        }
        assert_eq!(FilterState::from_index(3), None);
        assert_eq!(FilterState::HighRisk.next(), FilterState::All);
    }

    #[test]
    fn test_stat_cards_with_defaults() {
        let cards = stat_cards(None);
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["45", "12", "0.42", "8"]);
        let colors: Vec<ColorTag> = cards.iter().map(|c| c.color).collect();
        assert_eq!(
            colors,
            vec![ColorTag::Blue, ColorTag::Red, ColorTag::Yellow, ColorTag::Green]
        );
    }

    #[test]
    fn test_stat_cards_with_partial_stats() {
        let stats = StatsSummary {
            pending: Some(3),
            ..StatsSummary::default()
        };
        let cards = stat_cards(Some(&stats));
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["3", "12", "0.42", "8"]);
    }

    #[test]
    fn test_items_region_transitions() {
        let key = QueryKey::Items(FilterState::All);
        let mut cache = QueryCache::default();
        let now = Instant::now();

        assert!(ItemsRegion::from_query(cache.get(&key)).is_loading());

        cache.begin_fetch(key, now);
        assert!(ItemsRegion::from_query(cache.get(&key)).is_loading());

        cache.resolve(
            key,
            Ok(QueryData::Items(ItemsResponse::new(vec![Item::new("a")]))),
            now,
        );
        let region = ItemsRegion::from_query(cache.get(&key));
        assert_eq!(region.items().len(), 1);
    }

    #[test]
    fn test_items_region_failed() {
        let key = QueryKey::Items(FilterState::Pending);
        let mut cache = QueryCache::default();
        let now = Instant::now();
        cache.begin_fetch(key, now);
        cache.resolve(key, Err(ApiError::Decode("bad".into())), now);

        let region = ItemsRegion::from_query(cache.get(&key));
        assert!(matches!(region, ItemsRegion::Failed { .. }));
        assert!(region.items().is_empty());
    }
}
