//! Click action handler.

use super::hit_area::ClickAction;
use crate::app::App;

/// Apply a click action to the app.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::SelectFilter(filter) => {
            tracing::debug!("Click: SelectFilter({})", filter.key());
            app.set_filter(filter);
        }
        ClickAction::Refresh => {
            tracing::debug!("Click: Refresh");
            app.refresh();
        }
    }
}
