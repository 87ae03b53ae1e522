//! lens - a terminal dashboard for the CrisisLens review queue
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod models;
pub mod query;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
