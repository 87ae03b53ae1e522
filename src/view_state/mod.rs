//! View state module for decoupling UI rendering from application state.
//!
//! UI rendering is a pure function: data in, cells out. `App` builds a
//! [`RenderContext`] each frame and the `ui` module only ever sees that.
//!
//! ```text
//! App (filter, query cache) --render_context()--> RenderContext --> ui::render
//! ```

pub mod dashboard_view;

pub use dashboard_view::{
    stat_cards, ColorTag, FilterState, ItemsRegion, RenderContext, StatCardView, Theme,
    STATUS_PENDING_REVIEW,
};
