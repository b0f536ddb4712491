//! Core scene analysis logic and orchestration.
//!
//! This module serves as the central hub for the analysis pipeline within the
//! cinescope-core library. Each pipeline stage lives in its own submodule and
//! the orchestration functions are re-exported here.

/// Closed label sets for actions, framing and color grades
pub mod labels;

/// One-sample-per-second frame selection over ffmpeg
pub mod sampler;

/// Pose-based action state machine
pub mod action;

/// Per-sample fusion of oracle output into timeline records
pub mod fusion;

/// Run-length segmentation of timelines into beats
pub mod segmentation;

/// Screenplay text rendering
pub mod screenplay;

/// End-to-end analysis orchestration
pub mod analysis;

pub use analysis::{AnalysisResult, analyze_upload, analyze_video};
pub use fusion::{ClassificationRecord, FramingSource, Timeline};
pub use screenplay::Screenplay;
pub use segmentation::{Beat, DurationConvention};
