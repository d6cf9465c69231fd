//! Tracing setup for the store
//!
//! The configured level is only a default: a `RUST_LOG` in the environment
//! wins. With a log directory the output goes to a daily rolling file named
//! after [`LOG_FILE_PREFIX`], otherwise to stdout.

use std::path::Path;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "diner-store";

const DEFAULT_LEVEL: &str = "info";

/// Stdout logging at the default level
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Install the global subscriber once; later calls keep the first one.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or(DEFAULT_LEVEL)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match file_dir(log_dir) {
        Some(dir) => builder
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        None => builder.try_init(),
    };
    if installed.is_ok() {
        tracing::debug!(log_dir = ?log_dir, "logger installed");
    }
}

/// The directory to roll files into, if it exists
fn file_dir(log_dir: Option<&str>) -> Option<&Path> {
    log_dir.map(Path::new).filter(|dir| dir.is_dir())
}
