//! Mouse interaction for the dashboard.
//!
//! Filter buttons register hit areas during rendering; clicks are mapped back
//! to [`ClickAction`]s and applied by [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
