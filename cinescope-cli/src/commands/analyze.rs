//! Implementation of the 'analyze' subcommand.
//!
//! Builds the core configuration and oracle set from the arguments, runs the
//! analysis on a file or on stdin, and emits the screenplay.

use crate::cli::AnalyzeArgs;
use crate::commands::emit_result;
use crate::error::{CliErrorContext, CliResult};

use cinescope_core::classifiers::{
    AnnotationTrack, FaceRatioFramingClassifier, HsvColorGrader, NullOracle, ObjectDetector,
    Oracles, PoseEstimator,
};
use cinescope_core::external::{CrateFfprobeExecutor, SidecarSpawner, check_dependency};
use cinescope_core::terminal;
use cinescope_core::{CoreConfig, CoreConfigBuilder, CoreResult, analyze_upload, analyze_video};

use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Input path that selects stdin.
pub const STDIN_INPUT: &str = "-";

/// Builds the core configuration for an analysis run.
pub fn build_config(args: &AnalyzeArgs) -> CoreResult<CoreConfig> {
    let mut builder = CoreConfigBuilder::new()
        .detection_confidence(args.confidence)
        .framing_source(args.framing_source.into())
        .duration_convention(args.duration_convention.into());
    if let Some(dir) = &args.temp_dir {
        builder = builder.temp_dir(dir.clone());
    }
    let config = builder.build();
    config.validate()?;
    Ok(config)
}

/// Returns true when the input should be read from stdin.
pub fn reads_stdin(input: &Path) -> bool {
    input.as_os_str() == STDIN_INPUT
}

/// Main entry point for the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> CliResult<()> {
    let start = Instant::now();
    let config = build_config(args)?;

    check_dependency("ffprobe")?;
    check_dependency("ffmpeg")?;

    let track = args
        .annotations
        .as_deref()
        .map(AnnotationTrack::from_path)
        .transpose()?;

    terminal::print_section("Analysis");
    let source = if reads_stdin(&args.input_path) {
        "stdin".to_string()
    } else {
        args.input_path.display().to_string()
    };
    terminal::print_status("Input", &source);
    match &args.annotations {
        Some(path) => terminal::print_status("Annotations", &path.display().to_string()),
        None => terminal::print_warning(
            "No annotations supplied; every sample will be 'No action detected'",
        ),
    }

    let color = HsvColorGrader::new();
    let framing = FaceRatioFramingClassifier::new(track.clone().unwrap_or_default());
    let detector: &dyn ObjectDetector = match &track {
        Some(track) => track,
        None => &NullOracle,
    };
    let pose: &dyn PoseEstimator = match &track {
        Some(track) => track,
        None => &NullOracle,
    };
    let oracles = Oracles {
        detector,
        pose,
        color: &color,
        framing: &framing,
    };

    let spawner = SidecarSpawner;
    let prober = CrateFfprobeExecutor::new();
    let result = if reads_stdin(&args.input_path) {
        debug!("Staging stdin input");
        analyze_upload(io::stdin().lock(), &spawner, &prober, oracles, &config)?
    } else {
        analyze_video(&spawner, &prober, oracles, &args.input_path, &config)?
    };

    if let Some(path) = &args.timeline_out {
        let json = result.timeline.to_json_string_pretty()?;
        fs::write(path, json)
            .cli_with_context(|| format!("Failed to write timeline '{}'", path.display()))?;
        terminal::print_status("Timeline", &path.display().to_string());
    }

    emit_result(&result, args.json, args.output.as_deref())?;
    info!("Analysis finished in {:.1}s", start.elapsed().as_secs_f64());
    Ok(())
}
