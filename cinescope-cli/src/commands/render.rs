//! Implementation of the 'render' subcommand.
//!
//! Loads a timeline saved by `analyze --timeline-out`, optionally recomputes
//! its framing, and segments and renders it again.

use crate::cli::RenderArgs;
use crate::commands::emit_result;
use crate::error::{CliErrorContext, CliResult};

use cinescope_core::terminal;
use cinescope_core::{AnalysisResult, Timeline};

use log::debug;
use std::fs;

/// Loads the saved timeline named by `args`.
pub fn load_timeline(args: &RenderArgs) -> CliResult<Timeline> {
    let contents = fs::read_to_string(&args.timeline).cli_with_context(|| {
        format!("Failed to read timeline '{}'", args.timeline.display())
    })?;
    let timeline = Timeline::from_json_str(&contents)?;
    debug!(
        "Loaded {} record(s) from {}",
        timeline.len(),
        args.timeline.display()
    );
    Ok(match args.framing_source {
        Some(source) => timeline.reframed(source.into()),
        None => timeline,
    })
}

/// Main entry point for the render command.
pub fn run_render(args: &RenderArgs) -> CliResult<()> {
    terminal::print_section("Render");
    terminal::print_status("Timeline", &args.timeline.display().to_string());

    let timeline = load_timeline(args)?;
    let result = AnalysisResult::from_timeline(timeline, args.duration_convention.into());
    emit_result(&result, args.json, args.output.as_deref())
}
