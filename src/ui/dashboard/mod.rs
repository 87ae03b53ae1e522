//! Dashboard UI module
//!
//! The review queue screen: header, stat cards, filter toggle, item list and
//! a footer hint row.

pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod item_card;
pub mod item_list;
pub mod stat_cards;
pub mod states;

pub use crate::view_state::{FilterState, ItemsRegion, RenderContext, Theme};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::ui::interaction::HitAreaRegistry;

/// Filter row plus the blank rows above and below it
const FILTER_BAND_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;

/// Narrowest terminal that fits every filter button and the 2×2 stat grid
pub fn min_width() -> u16 {
    filter_bar::row_width().max(stat_cards::min_grid_width())
}

/// Shortest terminal, at `width`, that fits all four stat cards and one item card
pub fn min_height(width: u16) -> u16 {
    fixed_height(width) + item_list::MIN_LIST_HEIGHT
}

/// Rows used by everything except the item list
fn fixed_height(width: u16) -> u16 {
    header::HEADER_HEIGHT + stat_cards::grid_height(width) + FILTER_BAND_HEIGHT + FOOTER_HEIGHT
}

// ============================================================================
// Main Dashboard Rendering
// ============================================================================

/// Render the complete dashboard view
///
/// # Layout
/// ```text
/// +------------------------------------------+
/// | HEADER: Dashboard          ⠋ refreshing  |
/// +------------------------------------------+
/// | STAT CARDS: pending  high  avg  locations|
/// +------------------------------------------+
/// | FILTERS: [All Items] Pending  High Risk  |
/// +------------------------------------------+
/// | ITEM LIST: summary + item cards          |
/// +------------------------------------------+
/// | FOOTER: key hints                        |
/// +------------------------------------------+
/// ```
pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    registry: &mut HitAreaRegistry,
) {
    if area.width < min_width() || area.height < min_height(area.width) {
        states::render_too_small(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Length(stat_cards::grid_height(area.width)),
            Constraint::Length(1), // margin
            Constraint::Length(1), // filter toggle
            Constraint::Length(1), // margin
            Constraint::Min(1),    // item list
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    header::render(frame, chunks[0], ctx);
    stat_cards::render(frame, chunks[1], ctx);
    filter_bar::render(frame, chunks[3], ctx, registry);
    item_list::render(frame, chunks[5], ctx);
    footer::render(frame, chunks[6], ctx, registry);
}

/// Rows available to the item list for a terminal of the given size
pub fn item_list_height(width: u16, height: u16) -> u16 {
    height.saturating_sub(fixed_height(width))
}

// ============================================================================
// Tests
// ============================================================================
