// ============================================================================
// cinescope-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// This module implements the builder pattern for the CoreConfig structure,
// providing a fluent API for tuning the analysis heuristics without touching
// the fields directly. Every setting starts from the CoreConfig defaults.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::CoreConfig;
use crate::processing::fusion::FramingSource;
use crate::processing::segmentation::DurationConvention;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use cinescope_core::config::CoreConfigBuilder;
/// use cinescope_core::processing::segmentation::DurationConvention;
///
/// let config = CoreConfigBuilder::new()
///     .run_ankle_movement(0.12)
///     .walk_ankle_movement(0.06)
///     .allow_subject("dog")
///     .duration_convention(DurationConvention::MemberSpan)
///     .build();
/// assert!(config.allowed_subjects.contains("dog"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory in which uploads are staged.
    ///
    /// # Arguments
    ///
    /// * `temp_dir` - The directory for temporary files
    pub fn temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.config.temp_dir = Some(temp_dir);
        self
    }

    /// Sets the confidence threshold passed to the object detector.
    ///
    /// # Arguments
    ///
    /// * `confidence` - Minimum detection confidence (0.0-1.0)
    pub fn detection_confidence(mut self, confidence: f32) -> Self {
        self.config.detection_confidence = confidence;
        self
    }

    /// Adds a detector label to the subject allow-set.
    pub fn allow_subject(mut self, label: &str) -> Self {
        self.config.allowed_subjects.insert(label.to_string());
        self
    }

    /// Sets the label family counted for the action state machine.
    ///
    /// The label is also added to the allow-set.
    pub fn subject_family(mut self, label: &str) -> Self {
        self.config.allowed_subjects.insert(label.to_string());
        self.config.subject_family = label.to_string();
        self
    }

    /// Sets the summed wrist displacement above which subjects are fighting.
    pub fn fight_wrist_movement(mut self, threshold: f64) -> Self {
        self.config.action_thresholds.fight_wrist_movement = threshold;
        self
    }

    /// Sets the ankle displacement above which a subject is running.
    pub fn run_ankle_movement(mut self, threshold: f64) -> Self {
        self.config.action_thresholds.run_ankle_movement = threshold;
        self
    }

    /// Sets the ankle displacement above which a subject is walking.
    pub fn walk_ankle_movement(mut self, threshold: f64) -> Self {
        self.config.action_thresholds.walk_ankle_movement = threshold;
        self
    }

    /// Sets the minimum subject count for the fighting rule.
    pub fn min_fighting_subjects(mut self, count: usize) -> Self {
        self.config.action_thresholds.min_fighting_subjects = count;
        self
    }

    /// Selects which framing opinion is authoritative for fused records.
    pub fn framing_source(mut self, source: FramingSource) -> Self {
        self.config.framing_source = source;
        self
    }

    /// Selects how beat durations are computed.
    pub fn duration_convention(mut self, convention: DurationConvention) -> Self {
        self.config.duration_convention = convention;
        self
    }

    /// Builds a CoreConfig instance from the builder.
    ///
    /// The result is not validated; call [`CoreConfig::validate`] before use.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
