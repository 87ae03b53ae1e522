//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - read-only HTTP access to the review backend

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
