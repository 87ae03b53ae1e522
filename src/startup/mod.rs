//! Startup: configuration and logging.
//!
//! # Components
//!
//! - [`config`] - Dashboard configuration from defaults, builder and environment
//! - [`logging`] - File-backed tracing subscriber
//!
//! # Usage
//!
//! ```ignore
//! use lens::startup::{init_default_logging, DashboardConfig};
//!
//! init_default_logging();
//! let config = DashboardConfig::from_env();
//! ```

pub mod config;
pub mod logging;

pub use config::DashboardConfig;
pub use logging::{init_default_logging, init_logging};
