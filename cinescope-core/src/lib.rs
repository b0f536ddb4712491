//! Core library for turning videos into scene breakdowns.
//!
//! A video is sampled once per second through ffmpeg. Every sample is
//! classified by a set of swappable oracles (object detector, pose estimator,
//! color grader, framing classifier), a pose-based state machine infers the
//! action, and the resulting per-second timeline is collapsed into beats and
//! rendered as a plain-text screenplay.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use cinescope_core::classifiers::{
//!     AnnotationTrack, FaceRatioFramingClassifier, HsvColorGrader, Oracles,
//! };
//! use cinescope_core::external::{CrateFfprobeExecutor, SidecarSpawner};
//! use cinescope_core::{CoreConfig, analyze_video};
//! use std::path::Path;
//!
//! let track = AnnotationTrack::from_path(Path::new("clip.annotations.json")).unwrap();
//! let color = HsvColorGrader::new();
//! let framing = FaceRatioFramingClassifier::new(track.clone());
//! let oracles = Oracles {
//!     detector: &track,
//!     pose: &track,
//!     color: &color,
//!     framing: &framing,
//! };
//!
//! let result = analyze_video(
//!     &SidecarSpawner,
//!     &CrateFfprobeExecutor::new(),
//!     oracles,
//!     Path::new("clip.mp4"),
//!     &CoreConfig::default(),
//! )
//! .unwrap();
//! print!("{}", result.screenplay);
//! ```

pub mod classifiers;
pub mod config;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod processing;
pub mod report;
pub mod temp_files;
pub mod terminal;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use processing::{
    AnalysisResult, Beat, ClassificationRecord, DurationConvention, FramingSource, Screenplay,
    Timeline, analyze_upload, analyze_video,
};
pub use report::AnalysisReport;
pub use utils::{format_duration, parse_frame_rate};
