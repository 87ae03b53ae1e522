//! Wire types exchanged with the review backend.

mod item;
mod stats;

pub use item::{Item, ItemsParams, ItemsResponse};
pub use stats::{
    StatsSummary, DEFAULT_AVG_RISK, DEFAULT_HIGH_RISK, DEFAULT_LOCATIONS, DEFAULT_PENDING,
};
