//! Logging initialization.
//!
//! The terminal belongs to the UI, so log output goes to a file under the
//! user's data directory. Verbosity comes from `LENS_LOG` using the usual
//! `EnvFilter` directive syntax (`debug`, `lens=trace,reqwest=warn`, ...).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the filter directives
pub const ENV_LOG: &str = "LENS_LOG";

/// Directive used when `LENS_LOG` is unset or invalid
pub const DEFAULT_DIRECTIVE: &str = "info";

const LOG_FILE_NAME: &str = "lens.log";

/// Default log file location: `<data dir>/lens/lens.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("lens").join(LOG_FILE_NAME))
}

/// Filter from `LENS_LOG`, falling back to [`DEFAULT_DIRECTIVE`]
pub fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber writing to `path`.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created, or if
/// a global subscriber is already installed.
pub fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Install logging at the default location, reporting failure on stderr.
///
/// The dashboard runs fine without logs, so this never fails.
pub fn init_default_logging() {
    let Some(path) = default_log_path() else {
        eprintln!("lens: no data directory, logging disabled");
        return;
    };
    if let Err(e) = init_logging(&path) {
        eprintln!("lens: logging disabled ({}): {}", path.display(), e);
    }
}
