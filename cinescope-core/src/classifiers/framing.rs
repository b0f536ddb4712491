//! Face-size based shot type classification.

use crate::classifiers::{FaceBox, FaceDetector, FramingClassifier};
use crate::error::CoreResult;
use crate::processing::labels::Framing;
use crate::processing::sampler::VideoFrame;

/// Face height / frame height above which the shot is a close-up.
pub const CLOSE_UP_FACE_RATIO: f64 = 0.35;

/// Face height / frame height above which the shot is a medium shot.
pub const MEDIUM_SHOT_FACE_RATIO: f64 = 0.2;

/// Maps detected faces to a shot type. Only the first face is considered.
pub fn framing_for_faces(faces: &[FaceBox], frame_height: u32) -> Framing {
    let Some(face) = faces.first() else {
        return Framing::WideShot;
    };
    if frame_height == 0 {
        return Framing::WideShot;
    }

    let ratio = f64::from(face.height) / f64::from(frame_height);
    if ratio > CLOSE_UP_FACE_RATIO {
        Framing::CloseUp
    } else if ratio > MEDIUM_SHOT_FACE_RATIO {
        Framing::MediumShot
    } else {
        Framing::WideShot
    }
}

/// Framing classifier driven by any [`FaceDetector`].
#[derive(Debug, Clone)]
pub struct FaceRatioFramingClassifier<D> {
    detector: D,
}

impl<D: FaceDetector> FaceRatioFramingClassifier<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }
}

impl<D: FaceDetector> FramingClassifier for FaceRatioFramingClassifier<D> {
    fn classify(&self, frame: &VideoFrame) -> CoreResult<Framing> {
        let faces = self.detector.detect_faces(frame)?;
        Ok(framing_for_faces(&faces, frame.height))
    }
}
