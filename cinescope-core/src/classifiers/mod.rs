//! Per-frame classifier interfaces.
//!
//! The pipeline treats every model as a self-contained oracle invoked once per
//! sampled frame. Each oracle is a trait so real models, replayed annotations
//! and test doubles can be swapped freely. Color grading and framing are
//! stateless and may be invoked concurrently, hence their `Sync` bound.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::processing::action::PoseFrame;
use crate::processing::labels::{ColorGrade, Framing};
use crate::processing::sampler::VideoFrame;

pub mod annotations;
pub mod color;
pub mod framing;

pub use annotations::AnnotationTrack;
pub use color::HsvColorGrader;
pub use framing::FaceRatioFramingClassifier;

/// One labelled detection reported by an object detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
}

/// Bounding box of a detected face, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceBox {
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
    #[serde(default)]
    pub width: u32,
    pub height: u32,
}

/// Detects labelled objects in a frame.
pub trait ObjectDetector {
    /// Returns detections at or above `confidence_threshold`.
    fn detect(&self, frame: &VideoFrame, confidence_threshold: f32) -> CoreResult<Vec<Detection>>;
}

/// Estimates body landmarks in a frame.
pub trait PoseEstimator {
    /// Returns the pose in fixed landmark order, or `None` when no body is found.
    fn estimate(&self, frame: &VideoFrame) -> CoreResult<Option<PoseFrame>>;
}

/// Classifies the color grade of a frame.
pub trait ColorGradeClassifier: Sync {
    fn classify(&self, frame: &VideoFrame) -> CoreResult<ColorGrade>;
}

/// Classifies the camera framing of a frame.
pub trait FramingClassifier: Sync {
    /// Returns one of Wide Shot, Medium Shot or Close-Up.
    fn classify(&self, frame: &VideoFrame) -> CoreResult<Framing>;
}

/// Finds faces in a frame.
pub trait FaceDetector: Sync {
    fn detect_faces(&self, frame: &VideoFrame) -> CoreResult<Vec<FaceBox>>;
}

/// The set of oracles consulted for every sample.
#[derive(Clone, Copy)]
pub struct Oracles<'a> {
    pub detector: &'a dyn ObjectDetector,
    pub pose: &'a dyn PoseEstimator,
    pub color: &'a dyn ColorGradeClassifier,
    pub framing: &'a dyn FramingClassifier,
}

/// An oracle that never finds anything.
///
/// Used when no model output is available: every sample fuses to
/// "No action detected" with an empty subject set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOracle;

impl ObjectDetector for NullOracle {
    fn detect(&self, _frame: &VideoFrame, _confidence_threshold: f32) -> CoreResult<Vec<Detection>> {
        Ok(Vec::new())
    }
}

impl PoseEstimator for NullOracle {
    fn estimate(&self, _frame: &VideoFrame) -> CoreResult<Option<PoseFrame>> {
        Ok(None)
    }
}

impl FaceDetector for NullOracle {
    fn detect_faces(&self, _frame: &VideoFrame) -> CoreResult<Vec<FaceBox>> {
        Ok(Vec::new())
    }
}
