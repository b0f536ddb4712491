//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `analyze` command.
/// This command samples a video and renders its screenplay.
pub mod analyze;

/// Module containing the implementation of the `render` command.
/// This command re-renders a saved timeline without touching video.
pub mod render;

use crate::cli_error;
use crate::error::{CliErrorContext, CliResult};

use cinescope_core::AnalysisResult;
use cinescope_core::terminal;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Summarizes the result on the terminal and writes the screenplay, or the
/// JSON report when `json` is set, to `output` or stdout.
pub(crate) fn emit_result(
    result: &AnalysisResult,
    json: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    terminal::print_status("Samples", &result.timeline.len().to_string());
    terminal::print_status("Beats", &result.beats.len().to_string());
    terminal::print_beats(&result.beats);

    let text = if json {
        let mut report = result.report().to_json_string_pretty()?;
        report.push('\n');
        report
    } else {
        result.screenplay.as_str().to_string()
    };

    match output {
        Some(path) => {
            if path.is_dir() {
                return Err(cli_error!("Output path '{}' is a directory", path.display()));
            }
            fs::write(path, text)
                .cli_with_context(|| format!("Failed to write '{}'", path.display()))?;
            terminal::print_success(&format!("Wrote {}", path.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .cli_context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
