//! Special state rendering for the item list region
//!
//! Loading spinner, empty list, fetch failure, and the too-small warning.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use crate::ui::helpers::spinner_frame;
use crate::view_state::{FilterState, Theme};

/// Text next to the spinner
pub const LOADING_TEXT: &str = "Loading items…";

fn centered(area: Rect, text_height: u16) -> Rect {
    let height = text_height.min(area.height);
    let y_offset = area.height.saturating_sub(height) / 2;
    Rect::new(area.x, area.y + y_offset, area.width, height)
}

/// Single loading indicator, centered in the region
pub fn render_loading(frame: &mut Frame, area: Rect, tick: u64, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(theme.accent)),
        Span::styled(format!(" {}", LOADING_TEXT), Style::default().fg(theme.dim)),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(area, 1));
}

/// Placeholder for a resolved but empty list
pub fn render_empty(frame: &mut Frame, area: Rect, filter: FilterState, theme: &Theme) {
    let text = Text::from(vec![
        Line::styled("No items", Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(
            format!("nothing matches \"{}\"", filter.label()),
            Style::default().fg(theme.dim),
        ),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(area, 2));
}

/// Fetch failure after retries were exhausted
pub fn render_failed(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let text = Text::from(vec![
        Line::styled(
            format!("⚠ {}", message),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ),
        Line::styled("press r to retry", Style::default().fg(theme.dim)),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(area, 2));
}

/// Warning shown instead of the dashboard when the terminal is too small
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let warning = Line::styled(
        "⚠ terminal too small",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(warning, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height).any(|y| {
            let line: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.contains(needle)
        })
    }

    #[test]
    fn test_loading_indicator() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|frame| render_loading(frame, frame.area(), 1, &theme))
            .unwrap();

        assert!(buffer_contains(&terminal, "⠙ Loading items…"));
    }

    #[test]
    fn test_empty_mentions_filter() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|frame| render_empty(frame, frame.area(), FilterState::Pending, &theme))
            .unwrap();

        assert!(buffer_contains(&terminal, "No items"));
        assert!(buffer_contains(&terminal, "Pending Review"));
    }

    #[test]
    fn test_failed_shows_message_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(60, 5)).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|frame| {
                render_failed(frame, frame.area(), "Unable to reach the review backend.", &theme)
            })
            .unwrap();

        assert!(buffer_contains(&terminal, "Unable to reach the review backend."));
        assert!(buffer_contains(&terminal, "press r to retry"));
    }

    #[test]
    fn test_too_small() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();

        terminal
            .draw(|frame| render_too_small(frame, frame.area()))
            .unwrap();

        assert!(buffer_contains(&terminal, "terminal too small"));
    }
}
