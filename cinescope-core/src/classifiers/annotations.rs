//! Replayed model output.
//!
//! An [`AnnotationTrack`] holds detector, pose and face results computed
//! elsewhere (for example by a Python model server) keyed by sample second,
//! and plays them back as oracles during analysis. Seconds without an entry
//! behave like an empty frame.
//!
//! ```json
//! {
//!   "frames": {
//!     "0": {
//!       "detections": [{ "label": "person", "confidence": 0.91 }],
//!       "pose": [{ "x": 0.41, "y": 0.38 }, ...],
//!       "faces": [{ "height": 220 }]
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::classifiers::{Detection, FaceBox, FaceDetector, ObjectDetector, PoseEstimator};
use crate::error::{CoreError, CoreResult};
use crate::processing::action::PoseFrame;
use crate::processing::sampler::VideoFrame;

/// Model output for a single sampled second.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameAnnotation {
    #[serde(default)]
    pub detections: Vec<Detection>,
    #[serde(default)]
    pub pose: Option<PoseFrame>,
    #[serde(default)]
    pub faces: Vec<FaceBox>,
}

/// Per-second annotations replayed as detector, pose and face oracles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTrack {
    #[serde(default)]
    pub frames: BTreeMap<u64, FrameAnnotation>,
}

impl AnnotationTrack {
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a track from a JSON file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to read annotations '{}': {}",
                path.display(),
                e
            ))
        })?;
        let track = Self::from_json_str(&contents)?;
        log::debug!(
            "Loaded {} annotated second(s) from {}",
            track.frames.len(),
            path.display()
        );
        Ok(track)
    }

    pub fn insert(&mut self, timestamp: u64, annotation: FrameAnnotation) {
        self.frames.insert(timestamp, annotation);
    }

    fn at(&self, frame: &VideoFrame) -> Option<&FrameAnnotation> {
        self.frames.get(&frame.timestamp)
    }
}

impl ObjectDetector for AnnotationTrack {
    fn detect(&self, frame: &VideoFrame, confidence_threshold: f32) -> CoreResult<Vec<Detection>> {
        Ok(self
            .at(frame)
            .map(|a| {
                a.detections
                    .iter()
                    .filter(|d| d.confidence >= confidence_threshold)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl PoseEstimator for AnnotationTrack {
    fn estimate(&self, frame: &VideoFrame) -> CoreResult<Option<PoseFrame>> {
        Ok(self.at(frame).and_then(|a| a.pose.clone()))
    }
}

impl FaceDetector for AnnotationTrack {
    fn detect_faces(&self, frame: &VideoFrame) -> CoreResult<Vec<FaceBox>> {
        Ok(self.at(frame).map(|a| a.faces.clone()).unwrap_or_default())
    }
}
