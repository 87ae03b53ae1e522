//! Item list component for the dashboard
//!
//! Shows a loading indicator until the current filter has data, then one card
//! per item in backend order. The list scrolls by whole cards.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    Frame,
};

use super::item_card::{render_item_card, ITEM_CARD_HEIGHT};
use super::states;
use super::RenderContext;
use crate::view_state::ItemsRegion;

// ============================================================================
// Layout helpers
// ============================================================================

/// Rows reserved for the summary line above the cards
const SUMMARY_HEIGHT: u16 = 1;

/// Smallest region that still shows the summary and one whole card
pub const MIN_LIST_HEIGHT: u16 = SUMMARY_HEIGHT + ITEM_CARD_HEIGHT;

/// Number of whole cards that fit in `height` rows
pub fn visible_capacity(height: u16) -> usize {
    (height.saturating_sub(SUMMARY_HEIGHT) / ITEM_CARD_HEIGHT) as usize
}

/// Largest scroll offset that still fills the viewport
pub fn max_scroll(total: usize, capacity: usize) -> usize {
    total.saturating_sub(capacity.max(1))
}

/// Index range of the cards drawn for the given list length and offset
pub fn visible_range(total: usize, scroll_offset: usize, capacity: usize) -> std::ops::Range<usize> {
    let start = scroll_offset.min(max_scroll(total, capacity));
    let end = (start + capacity).min(total);
    start..end
}

/// Summary line text
pub fn summary_text(total: usize, range: &std::ops::Range<usize>) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    if range.is_empty() || (range.start == 0 && range.end == total) {
        format!("{} {}", total, noun)
    } else {
        format!("showing {}–{} of {} {}", range.start + 1, range.end, total, noun)
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Render the item list region
///
/// ```text
///   3 items
/// ┌ Flooded bridge photo ────────────── #a1 ┐
/// │ pending_review · telegram · Recife      │
/// │ risk ▓▓▓▓▓▓▓▓▓░ 0.81                    │
/// └─────────────────────────────────────────┘
/// ┌ ...
/// ```
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    match &ctx.items {
        ItemsRegion::Loading => states::render_loading(frame, area, ctx.tick, ctx.theme),
        ItemsRegion::Failed { message } => states::render_failed(frame, area, message, ctx.theme),
        ItemsRegion::Populated(items) if items.is_empty() => {
            states::render_empty(frame, area, ctx.filter, ctx.theme)
        }
        ItemsRegion::Populated(items) => {
            let capacity = visible_capacity(area.height);
            let range = visible_range(items.len(), ctx.scroll_offset, capacity);

            let summary = Line::styled(
                format!("  {}", summary_text(items.len(), &range)),
                Style::default().fg(ctx.theme.dim),
            );
            frame.render_widget(summary, Rect::new(area.x, area.y, area.width, SUMMARY_HEIGHT));

            let mut y = area.y + SUMMARY_HEIGHT;
            for item in &items[range] {
                let card_area = Rect::new(area.x, y, area.width, ITEM_CARD_HEIGHT);
                render_item_card(frame, card_area, item, ctx.theme);
                y += ITEM_CARD_HEIGHT;
            }
        }
    }
}
