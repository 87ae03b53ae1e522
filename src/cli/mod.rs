//! CLI module for lens.
//!
//! The CLI dispatcher is called early in main() to handle command-line flags
//! before initializing the TUI:
//!
//! ```ignore
//! use lens::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let api_url = match run_cli_command(command) {
//!     Ok(api_url) => api_url,
//!     Err(e) => { eprintln!("Error: {}", e); std::process::exit(2); }
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_help_command, handle_version_command, USAGE, VERSION};

use color_eyre::eyre::{eyre, Result};

/// Run a CLI command if applicable.
///
/// Returns the `--api-url` override when the TUI should start.
///
/// # Note
///
/// The `Version` and `Help` commands never return as they call `std::process::exit(0)`.
pub fn run_cli_command(command: CliCommand) -> Result<Option<String>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui { api_url } => Ok(api_url),
        CliCommand::Invalid(reason) => Err(eyre!("{}\n\n{}", reason, USAGE)),
    }
}
