//! Version and usage output for the lens CLI.

/// The current version of lens, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text for `--help`
pub const USAGE: &str = "\
lens - terminal dashboard for the CrisisLens review queue

Usage: lens [OPTIONS]

Options:
      --api-url <URL>  Review backend base URL (env: LENS_API_URL)
  -h, --help           Print help
  -V, --version        Print version

Environment:
  LENS_API_URL                default http://localhost:8000
  LENS_REQUEST_TIMEOUT_SECS   default 10
  LENS_STALE_SECS             default 0
  LENS_RETRY_LIMIT            default 3
  LENS_LOG                    log filter, default info

Keys: 1-3/tab select filter, j/k scroll, r refresh, q quit";

/// Version line printed by `--version`
pub fn version_line() -> String {
    format!("lens {}", VERSION)
}

/// Handle the --version command.
///
/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("{}", USAGE);
    std::process::exit(0)
}
