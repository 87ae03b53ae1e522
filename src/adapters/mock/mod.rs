//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable, recorded responses

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
