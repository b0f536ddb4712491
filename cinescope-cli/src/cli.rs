// cinescope-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use cinescope_core::{DurationConvention, FramingSource};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Cinescope: automatic scene breakdown",
    long_about = "Samples a video once per second, infers subjects, action, framing and color grade, \
                  and renders the result as screenplay beats via cinescope-core."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyzes a video and renders its screenplay
    Analyze(AnalyzeArgs),
    /// Renders a previously saved timeline without decoding video
    Render(RenderArgs),
}

/// Which framing opinion drives segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FramingSourceArg {
    /// Framing implied by the inferred action
    Action,
    /// Framing reported by the face-size classifier
    Classifier,
}

impl From<FramingSourceArg> for FramingSource {
    fn from(arg: FramingSourceArg) -> Self {
        match arg {
            FramingSourceArg::Action => FramingSource::ActionDerived,
            FramingSourceArg::Classifier => FramingSource::Classifier,
        }
    }
}

/// How beat durations are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DurationConventionArg {
    /// Inner beats run until the next beat starts; the last includes its final sample
    Legacy,
    /// Every beat runs from its first through its last sample inclusive
    MemberSpan,
}

impl From<DurationConventionArg> for DurationConvention {
    fn from(arg: DurationConventionArg) -> Self {
        match arg {
            DurationConventionArg::Legacy => DurationConvention::Legacy,
            DurationConventionArg::MemberSpan => DurationConvention::MemberSpan,
        }
    }
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Input video file, or "-" to read the video from stdin
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Optional: JSON file of per-second detections, poses and faces to replay
    #[arg(short = 'a', long, value_name = "FILE")]
    pub annotations: Option<PathBuf>,

    /// Print the JSON analysis report instead of the screenplay text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Optional: Save the per-second timeline as JSON
    #[arg(long, value_name = "FILE")]
    pub timeline_out: Option<PathBuf>,

    /// Optional: Write the screenplay (or report) to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Framing used to split beats
    #[arg(long, value_enum, default_value_t = FramingSourceArg::Action)]
    pub framing_source: FramingSourceArg,

    /// Beat duration convention
    #[arg(long, value_enum, default_value_t = DurationConventionArg::Legacy)]
    pub duration_convention: DurationConventionArg,

    /// Minimum detector confidence (0.0-1.0)
    #[arg(long, value_name = "FLOAT", default_value_t = 0.5)]
    pub confidence: f32,

    /// Optional: Directory for staging stdin input.
    /// Can also be set via the CINESCOPE_TEMP_DIR environment variable.
    #[arg(long, value_name = "DIR", env = "CINESCOPE_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Optional: Directory for log files
    #[arg(short, long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Timeline JSON saved by `analyze --timeline-out`
    #[arg(short = 't', long, required = true, value_name = "FILE")]
    pub timeline: PathBuf,

    /// Print the JSON analysis report instead of the screenplay text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Optional: Write the screenplay (or report) to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Optional: Recompute framing from this source before segmenting
    #[arg(long, value_enum)]
    pub framing_source: Option<FramingSourceArg>,

    /// Beat duration convention
    #[arg(long, value_enum, default_value_t = DurationConventionArg::Legacy)]
    pub duration_convention: DurationConventionArg,

    /// Optional: Directory for log files
    #[arg(short, long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
