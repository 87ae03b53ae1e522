//! Filter toggle
//!
//! Three buttons on one row. The active one is drawn on the accent colour and
//! every button registers a hit area so it can be clicked.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::RenderContext;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::view_state::FilterState;

/// Columns between buttons
const BUTTON_GAP: u16 = 2;

/// Columns before the first button
const LEADING_PAD: u16 = 2;

/// Rendered text of a button, with one column of padding on each side
pub fn button_text(filter: FilterState) -> String {
    format!(" {} ", filter.label())
}

fn button_width(filter: FilterState) -> u16 {
    button_text(filter).width() as u16
}

/// Columns needed to draw every button
pub fn row_width() -> u16 {
    let buttons: u16 = FilterState::ALL.into_iter().map(button_width).sum();
    LEADING_PAD + buttons + BUTTON_GAP * (FilterState::ALL.len() as u16 - 1)
}

/// Screen rectangles of the three buttons, in display order.
///
/// Buttons that do not fit are omitted; the dashboard never lays out the row
/// narrower than [`row_width`].
pub fn button_rects(area: Rect) -> Vec<(FilterState, Rect)> {
    let mut rects = Vec::with_capacity(FilterState::ALL.len());
    let mut x = area.x + LEADING_PAD;
    let right = area.x + area.width;

    for filter in FilterState::ALL {
        let width = button_width(filter);
        if x + width > right {
            break;
        }
        rects.push((filter, Rect::new(x, area.y, width, 1)));
        x += width + BUTTON_GAP;
    }
    rects
}

fn button_style(active: bool, ctx: &RenderContext) -> Style {
    if active {
        Style::default()
            .fg(Color::White)
            .bg(ctx.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Render the filter buttons
///
/// ```text
///   [ All Items ]  Pending Review   High Risk
/// ```
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, registry: &mut HitAreaRegistry) {
    if area.height < 1 {
        return;
    }

    let buf = frame.buffer_mut();
    for (filter, rect) in button_rects(area) {
        let active = filter == ctx.filter;
        let hover = (!active).then(|| Style::default().fg(Color::White).bg(Color::DarkGray));
        registry.register(rect, ClickAction::SelectFilter(filter), hover);

        let style = registry
            .get_hover_style(rect)
            .unwrap_or_else(|| button_style(active, ctx));
        render_button(buf, rect, filter, style);
    }
}

fn render_button(buf: &mut Buffer, rect: Rect, filter: FilterState, style: Style) {
    buf.set_string(rect.x, rect.y, button_text(filter), style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_button_rects_layout() {
        let rects = button_rects(Rect::new(0, 5, 80, 1));
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], (FilterState::All, Rect::new(2, 5, 11, 1)));
        assert_eq!(rects[1].0, FilterState::Pending);
        assert_eq!(rects[1].1.x, 2 + 11 + BUTTON_GAP);
        assert_eq!(rects[2].0, FilterState::HighRisk);
    }

    #[test]
    fn test_button_rects_clip_when_narrow() {
        let rects = button_rects(Rect::new(0, 0, 20, 1));
        assert_eq!(rects.len(), 1);
    }

    #[test]
    fn test_row_width_fits_every_button() {
        assert_eq!(row_width(), 44);
        assert_eq!(button_rects(Rect::new(0, 0, row_width(), 1)).len(), 3);
        assert_eq!(button_rects(Rect::new(0, 0, row_width() - 1, 1)).len(), 2);
    }

    #[test]
    fn test_exactly_one_active_button() {
        let theme = Theme::default();
        for active in FilterState::ALL {
            let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
            let ctx = RenderContext::new(&theme).with_filter(active);
            let mut registry = HitAreaRegistry::new();

            terminal
                .draw(|frame| render(frame, frame.area(), &ctx, &mut registry))
                .unwrap();

            let buffer = terminal.backend().buffer();
            let highlighted: Vec<FilterState> = button_rects(Rect::new(0, 0, 60, 1))
                .into_iter()
                .filter(|(_, rect)| buffer[(rect.x, rect.y)].bg == theme.accent)
                .map(|(filter, _)| filter)
                .collect();
            assert_eq!(highlighted, vec![active]);
            assert_eq!(registry.len(), 3);
        }
    }

    #[test]
    fn test_hovered_inactive_button_is_highlighted() {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let ctx = RenderContext::new(&theme);
        let mut registry = HitAreaRegistry::new();

        terminal
            .draw(|frame| render(frame, frame.area(), &ctx, &mut registry))
            .unwrap();
        let (_, pending) = button_rects(Rect::new(0, 0, 60, 1))[1];
        assert!(registry.update_hover(pending.x, 0));

        registry.clear();
        terminal
            .draw(|frame| render(frame, frame.area(), &ctx, &mut registry))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(pending.x, 0)].bg, Color::DarkGray);
    }

    #[test]
    fn test_clicking_button_maps_to_filter() {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let ctx = RenderContext::new(&theme);
        let mut registry = HitAreaRegistry::new();

        terminal
            .draw(|frame| render(frame, frame.area(), &ctx, &mut registry))
            .unwrap();

        let (_, high_risk) = button_rects(Rect::new(0, 0, 60, 1))[2];
        assert_eq!(
            registry.hit_test(high_risk.x + 1, 0),
            Some(ClickAction::SelectFilter(FilterState::HighRisk))
        );
    }
}
