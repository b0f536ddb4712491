//! Fusion of per-sample oracle output into classification records.
//!
//! For every sampled frame the [`Fuser`] consults the object detector and the
//! pose estimator, advances the action state machine, and grades color and
//! framing concurrently. The result is one [`ClassificationRecord`] appended
//! to a [`Timeline`] that is strictly ordered by timestamp.
//!
//! A saved timeline is a JSON object keyed by second:
//!
//! ```json
//! {
//!   "0": {
//!     "objects": ["person"],
//!     "actions": ["Walking"],
//!     "camera_angle": "Medium Shot",
//!     "shot_type": "Wide Shot",
//!     "color_grade": "Warm Tones",
//!     "dialogue": ""
//!   }
//! }
//! ```

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::classifiers::Oracles;
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult, classifier_error};
use crate::processing::action::ActionState;
use crate::processing::labels::{ActionLabel, ColorGrade, Framing};
use crate::processing::sampler::VideoFrame;

/// Which framing opinion becomes a record's authoritative `camera_angle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramingSource {
    /// Framing implied by the inferred action.
    #[default]
    ActionDerived,
    /// Framing reported by the framing classifier.
    Classifier,
}

/// Everything known about one sampled second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Whole-second offset; carried by the timeline map key when serialized.
    #[serde(skip)]
    pub timestamp: u64,
    /// Allowed subject labels found in the frame.
    #[serde(default)]
    pub objects: BTreeSet<String>,
    /// Inferred action. Always a single label when produced by fusion.
    pub actions: Vec<ActionLabel>,
    /// Authoritative framing used for segmentation.
    pub camera_angle: Framing,
    /// The framing classifier's own opinion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<Framing>,
    pub color_grade: ColorGrade,
    #[serde(default)]
    pub dialogue: String,
}

impl ClassificationRecord {
    /// The record's action; a record without one counts as "No action detected".
    pub fn action(&self) -> ActionLabel {
        self.actions
            .first()
            .copied()
            .unwrap_or(ActionLabel::NoAction)
    }

    /// Framing according to `source`.
    ///
    /// Records without a classifier opinion fall back to `camera_angle`.
    pub fn framing(&self, source: FramingSource) -> Framing {
        match source {
            FramingSource::ActionDerived => self.action().implied_framing(),
            FramingSource::Classifier => self.shot_type.unwrap_or(self.camera_angle),
        }
    }

    /// Framing shown in the analysis report.
    pub fn reported_shot_type(&self) -> Framing {
        self.shot_type.unwrap_or(self.camera_angle)
    }
}

/// Classification records ordered by strictly increasing timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    records: Vec<ClassificationRecord>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, rejecting timestamps that do not increase.
    pub fn push(&mut self, record: ClassificationRecord) -> CoreResult<()> {
        if let Some(last) = self.records.last() {
            if record.timestamp <= last.timestamp {
                return Err(CoreError::TimelineOrder {
                    previous: last.timestamp,
                    timestamp: record.timestamp,
                });
            }
        }
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&ClassificationRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a copy whose `camera_angle`s follow `source`.
    pub fn reframed(&self, source: FramingSource) -> Timeline {
        let records = self
            .records
            .iter()
            .map(|record| ClassificationRecord {
                camera_angle: record.framing(source),
                ..record.clone()
            })
            .collect();
        Timeline { records }
    }

    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Timeline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.records.iter().map(|r| (r.timestamp, r)))
    }
}

impl<'de> Deserialize<'de> for Timeline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let by_second = BTreeMap::<u64, ClassificationRecord>::deserialize(deserializer)?;
        let records = by_second
            .into_iter()
            .map(|(timestamp, record)| ClassificationRecord {
                timestamp,
                ..record
            })
            .collect();
        Ok(Timeline { records })
    }
}

/// Tags an oracle failure with the sample it happened on, keeping errors
/// that are already tagged.
fn tag_failure(name: &str, timestamp: u64) -> impl FnOnce(CoreError) -> CoreError + '_ {
    move |err| match err {
        CoreError::Classifier { .. } => err,
        other => classifier_error(name, timestamp, other.to_string()),
    }
}

/// Turns sampled frames into classification records, carrying the action
/// state machine between samples.
pub struct Fuser<'a> {
    oracles: Oracles<'a>,
    config: &'a CoreConfig,
    state: ActionState,
}

impl<'a> Fuser<'a> {
    pub fn new(oracles: Oracles<'a>, config: &'a CoreConfig) -> Self {
        Self {
            oracles,
            config,
            state: ActionState::new(),
        }
    }

    /// Classifies one sample. Frames must be supplied in increasing
    /// timestamp order. Any oracle failure is returned as a
    /// [`CoreError::Classifier`].
    pub fn fuse(&mut self, frame: &VideoFrame) -> CoreResult<ClassificationRecord> {
        let timestamp = frame.timestamp;

        let detections = self
            .oracles
            .detector
            .detect(frame, self.config.detection_confidence)
            .map_err(tag_failure("object detector", timestamp))?;

        let allowed: Vec<&str> = detections
            .iter()
            .map(|d| d.label.as_str())
            .filter(|label| self.config.allowed_subjects.contains(*label))
            .collect();
        let subject_count = allowed
            .iter()
            .filter(|label| **label == self.config.subject_family)
            .count();
        let objects: BTreeSet<String> = allowed.into_iter().map(str::to_string).collect();

        let pose = self
            .oracles
            .pose
            .estimate(frame)
            .map_err(tag_failure("pose estimator", timestamp))?;

        let state = std::mem::take(&mut self.state);
        let (action, next_state) =
            state.step(pose, subject_count, &self.config.action_thresholds);
        self.state = next_state;

        let color = self.oracles.color;
        let framing = self.oracles.framing;
        let (color_grade, classified_framing) =
            rayon::join(|| color.classify(frame), || framing.classify(frame));
        let color_grade = color_grade.map_err(tag_failure("color grade classifier", timestamp))?;
        let classified_framing =
            classified_framing.map_err(tag_failure("framing classifier", timestamp))?;

        let camera_angle = match self.config.framing_source {
            FramingSource::ActionDerived => action.implied_framing(),
            FramingSource::Classifier => classified_framing,
        };

        log::trace!(
            "Sample {}s: subjects={:?} count={} action={} framing={} shot={} color={}",
            timestamp,
            objects,
            subject_count,
            action,
            camera_angle,
            classified_framing,
            color_grade
        );

        Ok(ClassificationRecord {
            timestamp,
            objects,
            actions: vec![action],
            camera_angle,
            shot_type: Some(classified_framing),
            color_grade,
            dialogue: String::new(),
        })
    }
}
