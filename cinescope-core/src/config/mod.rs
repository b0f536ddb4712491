//! Configuration structures and constants for the cinescope-core library.
//!
//! This module provides the configuration for the analysis pipeline: the
//! heuristic thresholds of the action state machine, the subject allow-set
//! used to filter detector output, and the conventions used when fusing and
//! segmenting the per-second timeline.

mod builder;

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};
use crate::processing::action::ActionThresholds;
use crate::processing::fusion::FramingSource;
use crate::processing::segmentation::DurationConvention;

pub use builder::CoreConfigBuilder;

// Default constants

/// Combined left+right wrist displacement (normalized units) above which two or
/// more subjects are considered to be fighting.
pub const DEFAULT_FIGHT_WRIST_MOVEMENT: f64 = 0.2;

/// Left ankle displacement (normalized units) above which the subject is running.
pub const DEFAULT_RUN_ANKLE_MOVEMENT: f64 = 0.1;

/// Left ankle displacement (normalized units) above which the subject is walking.
pub const DEFAULT_WALK_ANKLE_MOVEMENT: f64 = 0.05;

/// Minimum number of detected subjects for the fighting rule to apply.
pub const DEFAULT_MIN_FIGHTING_SUBJECTS: usize = 2;

/// Confidence threshold passed to the object detector.
pub const DEFAULT_DETECTION_CONFIDENCE: f32 = 0.5;

/// Detector label family counted for the action state machine.
pub const DEFAULT_SUBJECT_FAMILY: &str = "person";

/// Main configuration structure for the cinescope-core library.
///
/// Created by the consumer of the library (e.g. cinescope-cli) and passed to
/// [`crate::analyze_video`]. Every field has a default, so
/// `CoreConfig::default()` reproduces the reference heuristic exactly.
///
/// # Examples
///
/// ```rust
/// use cinescope_core::config::CoreConfigBuilder;
/// use cinescope_core::processing::fusion::FramingSource;
///
/// let config = CoreConfigBuilder::new()
///     .detection_confidence(0.6)
///     .framing_source(FramingSource::Classifier)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Optional directory for staged uploads (defaults to the system temp dir)
    pub temp_dir: Option<PathBuf>,

    /// Confidence threshold handed to the object detector
    pub detection_confidence: f32,

    /// Detector labels kept in a record's subject set; everything else is dropped
    pub allowed_subjects: BTreeSet<String>,

    /// Label whose occurrence count feeds the action state machine
    pub subject_family: String,

    /// Motion thresholds for the action state machine
    pub action_thresholds: ActionThresholds,

    /// Which framing opinion is authoritative for the fused record
    pub framing_source: FramingSource,

    /// How beat durations are computed when segmenting
    pub duration_convention: DurationConvention,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            detection_confidence: DEFAULT_DETECTION_CONFIDENCE,
            allowed_subjects: BTreeSet::from([DEFAULT_SUBJECT_FAMILY.to_string()]),
            subject_family: DEFAULT_SUBJECT_FAMILY.to_string(),
            action_thresholds: ActionThresholds::default(),
            framing_source: FramingSource::default(),
            duration_convention: DurationConvention::default(),
        }
    }
}

impl CoreConfig {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the configuration for values the pipeline cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.detection_confidence) {
            return Err(CoreError::Config(format!(
                "detection confidence must be within 0.0-1.0, got {}",
                self.detection_confidence
            )));
        }

        let t = &self.action_thresholds;
        for (name, value) in [
            ("fight wrist movement", t.fight_wrist_movement),
            ("run ankle movement", t.run_ankle_movement),
            ("walk ankle movement", t.walk_ankle_movement),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} threshold must be a positive number, got {value}"
                )));
            }
        }
        if t.walk_ankle_movement >= t.run_ankle_movement {
            return Err(CoreError::Config(format!(
                "walk threshold ({}) must be below run threshold ({})",
                t.walk_ankle_movement, t.run_ankle_movement
            )));
        }

        if self.allowed_subjects.is_empty() {
            return Err(CoreError::Config(
                "at least one subject label must be allowed".to_string(),
            ));
        }
        if !self.allowed_subjects.contains(&self.subject_family) {
            return Err(CoreError::Config(format!(
                "subject family '{}' is not in the allowed subject set",
                self.subject_family
            )));
        }

        if let Some(dir) = &self.temp_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(CoreError::PathError(format!(
                    "temp dir '{}' is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.detection_confidence, 0.5);
        assert!(config.allowed_subjects.contains("person"));
        assert_eq!(config.action_thresholds.fight_wrist_movement, 0.2);
        assert_eq!(config.action_thresholds.run_ankle_movement, 0.1);
        assert_eq!(config.action_thresholds.walk_ankle_movement, 0.05);
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let mut config = CoreConfig::default();
        config.detection_confidence = 1.5;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_rejects_inverted_motion_thresholds() {
        let mut config = CoreConfig::default();
        config.action_thresholds.walk_ankle_movement = 0.2;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("walk threshold"));
    }

    #[test]
    fn test_rejects_non_finite_threshold() {
        let mut config = CoreConfig::default();
        config.action_thresholds.fight_wrist_movement = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_family_outside_allow_set() {
        let mut config = CoreConfig::default();
        config.subject_family = "dog".to_string();
        assert!(config.validate().is_err());

        config.allowed_subjects.clear();
        assert!(config.validate().is_err());
    }
}
