//! Item card
//!
//! ```text
//! ┌ Flooded bridge photo ─────────────────── #a1 ┐
//! │ pending_review · telegram · Porto Alegre     │
//! │ risk ▓▓▓▓▓▓▓▓▓░ 0.81                         │
//! └──────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Item;
use crate::ui::helpers::{risk_bar, truncate_to_width};
use crate::ui::theme::risk_color;
use crate::view_state::Theme;

/// Rows taken by one card
pub const ITEM_CARD_HEIGHT: u16 = 4;

/// Middle-dot separated status, source and location
pub fn meta_line(item: &Item) -> String {
    let parts: Vec<&str> = [item.status(), item.source(), item.location()]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        "no details".to_string()
    } else {
        parts.join(" · ")
    }
}

/// Render one item card into `area`
pub fn render_item_card(frame: &mut Frame, area: Rect, item: &Item, theme: &Theme) {
    if area.width < 10 || area.height < 3 {
        return;
    }

    let inner_width = area.width.saturating_sub(4) as usize;
    let id_label = format!(" #{} ", truncate_to_width(&item.id, 12));
    let title_width = inner_width.saturating_sub(id_label.chars().count());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Line::from(Span::styled(
            format!(" {} ", truncate_to_width(item.title(), title_width)),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .title_top(Line::styled(id_label, Style::default().fg(theme.dim)).right_aligned());

    let meta = Line::styled(
        truncate_to_width(&meta_line(item), inner_width),
        Style::default().fg(theme.dim),
    );
    let risk = match item.risk_score() {
        Some(score) => Line::from(vec![
            Span::styled("risk ", Style::default().fg(theme.dim)),
            Span::styled(risk_bar(score), Style::default().fg(risk_color(score))),
            Span::raw(format!(" {:.2}", score)),
        ]),
        None => Line::styled("risk —", Style::default().fg(theme.dim)),
    };

    frame.render_widget(Paragraph::new(vec![meta, risk]).block(block), area);
}
