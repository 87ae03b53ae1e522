//! Footer hints for the dashboard
//!
//! One row of key hints. A failed background refetch takes precedence over
//! the hints so the user knows the visible list may be out of date.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

use crate::ui::dashboard::RenderContext;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::view_state::ItemsRegion;

/// Key hints for the current state
pub fn get_footer_hint(ctx: &RenderContext) -> &'static str {
    match &ctx.items {
        ItemsRegion::Failed { .. } => "r retry · tab filter · q quit",
        ItemsRegion::Populated(items) if !items.is_empty() => {
            "tab/1-3 filter · j/k scroll · r refresh · q quit"
        }
        _ => "tab/1-3 filter · r refresh · q quit",
    }
}

/// Render the footer row. Clicking it refreshes.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, registry: &mut HitAreaRegistry) {
    if area.height == 0 {
        return;
    }

    let line = match &ctx.background_error {
        Some(error) => Line::from(vec![
            Span::styled("  ⚠ ", Style::default().fg(ctx.theme.error)),
            Span::styled(
                format!("refresh failed: {}", error),
                Style::default().fg(ctx.theme.error),
            ),
        ]),
        None => Line::styled(
            format!("  {}", get_footer_hint(ctx)),
            Style::default().fg(ctx.theme.dim),
        ),
    };
    let width = (line.width() as u16).min(area.width);
    registry.register(
        Rect::new(area.x, area.y, width, 1),
        ClickAction::Refresh,
        None,
    );
    frame.render_widget(line, area);
}

// ============================================================================
// Tests
// ============================================================================
