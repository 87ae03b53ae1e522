//! Cache keys.

use std::fmt;

use crate::view_state::FilterState;

/// Identifies one cached query: the operation plus the inputs that select it.
///
/// The items key carries the filter rather than the derived request
/// parameters, so `All` and `HighRisk` are cached separately even though
/// they currently issue the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Items(FilterState),
    Stats,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Items(filter) => write!(f, "items/{}", filter.key()),
            QueryKey::Stats => write!(f, "stats"),
        }
    }
}
