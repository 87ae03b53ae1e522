//! UI rendering for the review dashboard
//!
//! Rendering is a pure function of a [`RenderContext`]. The app builds the
//! context each frame; the only thing rendering writes back is the hit area
//! registry used for mouse clicks.

pub mod dashboard;
pub mod helpers;
pub mod interaction;
pub mod theme;

// Re-export theme colors for external use
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

use ratatui::Frame;

use crate::app::App;
use crate::view_state::RenderContext;

/// Render the whole screen for the current app state
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.viewport_height = dashboard::item_list_height(area.width, area.height);

    let mut registry = std::mem::take(&mut app.hit_areas);
    registry.clear();
    {
        let ctx: RenderContext = app.render_context();
        dashboard::render_dashboard(frame, area, &ctx, &mut registry);
    }
    app.hit_areas = registry;
}
