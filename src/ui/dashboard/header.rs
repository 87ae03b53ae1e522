//! Dashboard header component
//!
//! Title on the left, a refresh indicator on the right, and a rule underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use super::RenderContext;
use crate::ui::helpers::spinner_frame;

/// Header title
pub const TITLE: &str = "Dashboard";

/// Header height in rows (title + rule)
pub const HEADER_HEIGHT: u16 = 2;

/// Render the dashboard header
///
/// # Layout
/// ```text
///   Dashboard                                   ⠋ refreshing
/// ─────────────────────────────────────────────────────────────
/// ```
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    if area.height < 1 || area.width < 12 {
        return;
    }

    let buf = frame.buffer_mut();

    render_title(buf, area, ctx);

    if ctx.refreshing {
        render_refresh_indicator(buf, area, ctx);
    }

    if area.height >= HEADER_HEIGHT {
        let style = Style::default().fg(ctx.theme.border);
        let y = area.y + 1;
        for x in area.x..area.x + area.width {
            buf[(x, y)].set_char('─').set_style(style);
        }
    }
}

fn render_title(buf: &mut Buffer, area: Rect, ctx: &RenderContext) {
    let style = Style::default()
        .fg(ctx.theme.header)
        .add_modifier(Modifier::BOLD);
    buf.set_stringn(area.x + 2, area.y, TITLE, area.width.saturating_sub(2) as usize, style);
}

fn render_refresh_indicator(buf: &mut Buffer, area: Rect, ctx: &RenderContext) {
    let text = format!("{} refreshing", spinner_frame(ctx.tick));
    let text_len = text.chars().count() as u16;
    let x = (area.x + area.width).saturating_sub(text_len + 2);
    // Never draw over the title
    if x <= area.x + 2 + TITLE.len() as u16 {
        return;
    }
    buf.set_string(x, area.y, text, Style::default().fg(ctx.theme.dim));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_header_title_and_rule() {
        let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
        let theme = Theme::default();
        let ctx = RenderContext::new(&theme);

        terminal
            .draw(|frame| render(frame, frame.area(), &ctx))
            .unwrap();

        assert!(row_text(&terminal, 0).starts_with("  Dashboard"));
        assert!(!row_text(&terminal, 0).contains("refreshing"));
        assert_eq!(row_text(&terminal, 1), "─".repeat(60));
    }

    #[test]
    fn test_header_refreshing_indicator() {
        let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
        let theme = Theme::default();
        let ctx = RenderContext::new(&theme).with_refreshing(true);

        terminal
            .draw(|frame| render(frame, frame.area(), &ctx))
            .unwrap();

        assert!(row_text(&terminal, 0).trim_end().ends_with("refreshing"));
    }
}
