//! Command-line argument parsing for the lens CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui {
        /// Backend base URL from `--api-url`, overriding the environment
        api_url: Option<String>,
    },
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown arguments are ignored. `--version` and `--help` win over
/// everything else.
///
/// # Examples
///
/// ```
/// use lens::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["lens".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
///
/// let args = vec!["lens".to_string(), "--api-url".to_string(), "http://h:1".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::RunTui { api_url: Some("http://h:1".to_string()) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => match args.next() {
                Some(url) if !url.starts_with('-') => api_url = Some(url),
                _ => return CliCommand::Invalid("--api-url requires a value".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    if url.is_empty() {
                        return CliCommand::Invalid("--api-url requires a value".to_string());
                    }
                    api_url = Some(url.to_string());
                }
            }
        }
    }
    CliCommand::RunTui { api_url }
}
