//! AppMessage enum for async communication within the application.

use crate::error::ApiResult;
use crate::query::{QueryData, QueryKey};

/// Messages received from background fetch tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A request for `key` finished, successfully or not
    QueryResolved {
        key: QueryKey,
        result: ApiResult<QueryData>,
    },
    /// The backoff delay for a failed request of `key` has elapsed
    RetryDue { key: QueryKey },
}
