// cinescope-cli/src/error.rs
//
// Errors in the CLI are `CoreError`s. Commands attach the file or stream they
// were working on so the single `Error:` line printed by main says what failed.

use cinescope_core::{CoreError, CoreResult};
use std::fmt::Display;

/// Result type returned by every command.
pub type CliResult<T> = CoreResult<T>;

/// Prefixes a failure with what the command was doing, turning it into
/// `CoreError::OperationFailed("<context>: <cause>")`.
pub trait CliErrorContext<T> {
    fn cli_with_context<C: Display>(self, context: impl FnOnce() -> C) -> CliResult<T>;

    fn cli_context(self, context: impl Display) -> CliResult<T>
    where
        Self: Sized,
    {
        self.cli_with_context(|| context)
    }
}

impl<T, E: Into<CoreError>> CliErrorContext<T> for Result<T, E> {
    fn cli_with_context<C: Display>(self, context: impl FnOnce() -> C) -> CliResult<T> {
        self.map_err(|e| CoreError::OperationFailed(format!("{}: {}", context(), e.into())))
    }
}

/// Builds a `CoreError::OperationFailed` for conditions the CLI detects itself,
/// such as an output path that names a directory.
#[macro_export]
macro_rules! cli_error {
    ($($arg:tt)*) => {
        ::cinescope_core::CoreError::OperationFailed(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_context_names_the_file() {
        let err = fs::read_to_string("/nonexistent/timeline.json")
            .cli_with_context(|| "Failed to read timeline '/nonexistent/timeline.json'")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with(
            "Operation failed: Failed to read timeline '/nonexistent/timeline.json': I/O error:"
        ));
    }

    #[test]
    fn test_context_keeps_core_error_text() {
        let failed: CoreResult<()> = Err(CoreError::Config("bad threshold".to_string()));
        let err = failed.cli_context("Loading config").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Operation failed: Loading config: Invalid configuration: bad threshold"
        );
    }

    #[test]
    fn test_cli_error_macro() {
        let err = cli_error!("Output path '{}' is a directory", "/tmp");
        assert_eq!(
            err.to_string(),
            "Operation failed: Output path '/tmp' is a directory"
        );
    }
}
