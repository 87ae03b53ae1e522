//! Keyboard and mouse input for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::ui::interaction::handle_click_action;
use crate::view_state::FilterState;

/// Cards moved per mouse wheel notch
const WHEEL_STEP: usize = 1;

impl App {
    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                if let Some(filter) = FilterState::from_index(index) {
                    self.set_filter(filter);
                }
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.cycle_filter(true),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.cycle_filter(false),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_up(usize::MAX),
            KeyCode::End | KeyCode::Char('G') => self.scroll_down(usize::MAX / 2),
            KeyCode::Char('r') => self.refresh(),
            _ => {}
        }
    }

    /// Handle a mouse event: clicks on hit areas, hover, and wheel scrolling
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_STEP),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::api::LensClient;
    use crate::models::{Item, ItemsResponse};
    use crate::query::{QueryConfig, QueryData, QueryKey};
    use crossterm::event::KeyEventState;
    use std::sync::Arc;
    use std::time::Instant;

    fn test_app() -> App {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(serde_json::json!({ "items": [] })));
        App::new(LensClient::new(Arc::new(http)), QueryConfig::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn seed_items(app: &mut App, count: usize) {
        let key = app.items_key();
        let items = (0..count).map(|i| Item::new(i.to_string())).collect();
        app.queries.begin_fetch(key, Instant::now());
        app.queries.resolve(
            key,
            Ok(QueryData::Items(ItemsResponse::new(items))),
            Instant::now(),
        );
    }

    #[tokio::test]
    async fn test_number_keys_select_filter() {
        let mut app = test_app();

        app.handle_key_event(press(KeyCode::Char('2')));
        assert_eq!(app.filter, FilterState::Pending);

        app.handle_key_event(press(KeyCode::Char('3')));
        assert_eq!(app.filter, FilterState::HighRisk);

        app.handle_key_event(press(KeyCode::Char('1')));
        assert_eq!(app.filter, FilterState::All);
    }

    #[tokio::test]
    async fn test_tab_cycles_filters() {
        let mut app = test_app();

        app.handle_key_event(press(KeyCode::Tab));
        assert_eq!(app.filter, FilterState::Pending);

        app.handle_key_event(press(KeyCode::BackTab));
        app.handle_key_event(press(KeyCode::Left));
        assert_eq!(app.filter, FilterState::HighRisk);
    }

    #[test]
    fn test_quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = test_app();
            app.handle_key_event(key);
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = test_app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_key_event(release);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = test_app();
        // Room for two cards plus the summary row
        app.viewport_height = 9;
        seed_items(&mut app, 5);

        app.handle_key_event(press(KeyCode::Char('j')));
        assert_eq!(app.scroll_offset, 1);

        app.handle_key_event(press(KeyCode::End));
        assert_eq!(app.scroll_offset, 3);

        app.handle_key_event(press(KeyCode::Down));
        assert_eq!(app.scroll_offset, 3);

        app.handle_key_event(press(KeyCode::Home));
        assert_eq!(app.scroll_offset, 0);
    }

    #[tokio::test]
    async fn test_filter_change_resets_scroll() {
        let mut app = test_app();
        app.viewport_height = 9;
        seed_items(&mut app, 5);
        app.scroll_down(2);
        assert_eq!(app.scroll_offset, 2);

        app.set_filter(FilterState::Pending);
        assert_eq!(app.scroll_offset, 0);
        assert!(app.queries.is_fetching(&QueryKey::Items(FilterState::Pending)));
    }

    #[tokio::test]
    async fn test_click_selects_filter() {
        use crate::ui::interaction::ClickAction;
        use ratatui::layout::Rect;

        let mut app = test_app();
        app.hit_areas.register(
            Rect::new(10, 5, 8, 1),
            ClickAction::SelectFilter(FilterState::HighRisk),
            None,
        );

        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });

        assert_eq!(app.filter, FilterState::HighRisk);
    }

    #[tokio::test]
    async fn test_click_refresh_refetches_visible_queries() {
        use crate::ui::interaction::ClickAction;
        use ratatui::layout::Rect;

        let mut app = test_app();
        seed_items(&mut app, 1);
        app.hit_areas
            .register(Rect::new(0, 29, 40, 1), ClickAction::Refresh, None);

        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 29,
            modifiers: KeyModifiers::NONE,
        });

        assert!(app.queries.is_fetching(&QueryKey::Stats));
        assert!(app.queries.is_fetching(&app.items_key()));
    }
}
