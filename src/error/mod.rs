//! Error types for the review dashboard.
//!
//! Every failure that reaches the screen is an [`ApiError`]. Errors are
//! classified the same way across the crate:
//!
//! | Variant | Description | Retryable |
//! |---------|-------------|-----------|
//! | Connection | Backend unreachable | Yes |
//! | Timeout | Request exceeded the configured timeout | Yes |
//! | Server | Non-2xx response | 5xx, 408 and 429 only |
//! | Decode | Body was not the expected JSON | No |
//! | InvalidUrl | Misconfigured base URL | No |
//! | Other | Anything else from the transport | No |

use thiserror::Error;

use crate::traits::HttpError;

/// Errors returned by [`crate::api::LensClient`].
///
/// `Clone` so a failure can be stored in the query cache and rendered on
/// every frame.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Backend returned a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Other transport error
    #[error("HTTP error: {0}")]
    Other(String),
}

impl ApiError {
    /// Check if this error is likely transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Connection(_) | ApiError::Timeout(_) => true,
            ApiError::Server { status, .. } => *status >= 500 || *status == 429 || *status == 408,
            ApiError::Decode(_) | ApiError::InvalidUrl(_) | ApiError::Other(_) => false,
        }
    }

    /// A short message suitable for the dashboard's item region.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Connection(_) => "Unable to reach the review backend.".to_string(),
            ApiError::Timeout(_) => "The review backend did not respond in time.".to_string(),
            ApiError::Server { status, .. } => match *status {
                401 | 403 => "Access to the review backend was denied.".to_string(),
                404 => "The review backend does not expose this endpoint.".to_string(),
                429 => "Too many requests. Please wait a moment.".to_string(),
                500..=599 => "The review backend is experiencing issues.".to_string(),
                _ => format!("The review backend returned HTTP {}.", status),
            },
            ApiError::Decode(_) => "The review backend sent an unexpected response.".to_string(),
            ApiError::InvalidUrl(_) => "The configured API URL is invalid.".to_string(),
            ApiError::Other(_) => "Request to the review backend failed.".to_string(),
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::ConnectionFailed(msg) => ApiError::Connection(msg),
            HttpError::Timeout(msg) => ApiError::Timeout(msg),
            HttpError::InvalidUrl(msg) => ApiError::InvalidUrl(msg),
            HttpError::Other(msg) => ApiError::Other(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
