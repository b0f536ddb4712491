// ============================================================================
// cinescope-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Logger initialization for the CLI
//
// The CLI logs through the `log` facade with the log4rs backend configured by
// cinescope-core. Messages always go to stderr; with --log-dir they are also
// written to a timestamped file. --verbose raises the level to debug.

use cinescope_core::CoreError;
use cinescope_core::file_logging::setup_logging;
use log::LevelFilter;
use std::path::{Path, PathBuf};

use crate::error::CliResult;

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("cinescope_analyze_{}.log", cinescope::logging::get_timestamp());
/// assert!(log_filename.ends_with(".log"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Log level for the given verbosity flag.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Path of the log file for `command` inside `log_dir`.
pub fn log_file_path(log_dir: &Path, command: &str) -> PathBuf {
    log_dir.join(format!("cinescope_{}_{}.log", command, get_timestamp()))
}

/// Initializes logging for one CLI invocation and returns the log file path,
/// if any.
pub fn init_logging(
    verbose: bool,
    log_dir: Option<&Path>,
    command: &str,
) -> CliResult<Option<PathBuf>> {
    let log_file = log_dir.map(|dir| log_file_path(dir, command));
    setup_logging(log_level(verbose), log_file.as_deref())
        .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize logging: {e}")))?;
    Ok(log_file)
}
