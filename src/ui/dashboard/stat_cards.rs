//! Stat card grid
//!
//! Four cards in one row on wide terminals, a 2×2 grid otherwise.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::RenderContext;
use crate::ui::helpers::truncate_to_width;
use crate::ui::theme::tag_color;
use crate::view_state::{stat_cards, StatCardView, Theme};

/// Height of a single card (border, title, value, border)
pub const CARD_HEIGHT: u16 = 4;

/// Columns between neighbouring cards
const CARD_SPACING: u16 = 1;

/// Narrowest card that shows its icon and full title inside the borders
pub fn min_card_width() -> u16 {
    stat_cards(None)
        .iter()
        .map(|card| (card.icon.width() + 1 + card.title.width()) as u16 + 2)
        .max()
        .unwrap_or(0)
}

/// Narrowest area the 2×2 grid fits in
pub fn min_grid_width() -> u16 {
    min_card_width() * 2 + CARD_SPACING
}

/// Widths at or above this fit all four cards on one row
pub fn wide_breakpoint() -> u16 {
    min_card_width() * 4 + CARD_SPACING * 3
}

/// Rows needed for the grid at the given width
pub fn grid_height(width: u16) -> u16 {
    if width >= wide_breakpoint() {
        CARD_HEIGHT
    } else {
        CARD_HEIGHT * 2
    }
}

/// Render the stat card grid
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let cells: Vec<Rect> = if area.width >= wide_breakpoint() {
        Layout::horizontal([Constraint::Ratio(1, 4); 4])
            .spacing(CARD_SPACING)
            .split(area)
            .to_vec()
    } else {
        let rows = Layout::vertical([Constraint::Length(CARD_HEIGHT); 2]).split(area);
        rows.iter()
            .flat_map(|row| {
                Layout::horizontal([Constraint::Ratio(1, 2); 2])
                    .spacing(CARD_SPACING)
                    .split(*row)
                    .to_vec()
            })
            .collect()
    };

    for (card, cell) in ctx.stat_cards.iter().zip(cells) {
        render_stat_card(frame, cell, card, ctx.theme);
    }
}

/// Render one stat card
///
/// ```text
/// ┌──────────────────┐
/// │ ◷ Pending Review │
/// │ 45               │
/// └──────────────────┘
/// ```
pub fn render_stat_card(frame: &mut Frame, area: Rect, card: &StatCardView, theme: &Theme) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let color = tag_color(card.color);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner_width = area.width.saturating_sub(2) as usize;

    let heading = Line::from(vec![
        Span::styled(card.icon, Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(card.title, inner_width.saturating_sub(2)),
            Style::default().fg(theme.dim),
        ),
    ]);
    let value = Line::styled(
        truncate_to_width(&card.value, inner_width),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );

    frame.render_widget(Paragraph::new(vec![heading, value]).block(block), area);
}
