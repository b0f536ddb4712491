//! Pose-based action inference.
//!
//! The state machine consumes one [`PoseFrame`] per sample together with the
//! number of detected subjects and emits exactly one [`ActionLabel`]. Its only
//! carried state is the previous pose, which is passed in and returned
//! explicitly through [`ActionState::step`] so samples are always processed in
//! strictly increasing timestamp order by the caller.
//!
//! Decision order (first match wins):
//! 1. no current pose -> "No action detected"
//! 2. enough subjects and summed wrist displacement above threshold -> "Fighting"
//! 3. each wrist above the elbow on the same side -> "Raising Hands"
//! 4. with a previous pose, left ankle displacement -> "Running" / "Walking"
//! 5. otherwise -> "Standing Still"

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_FIGHT_WRIST_MOVEMENT, DEFAULT_MIN_FIGHTING_SUBJECTS, DEFAULT_RUN_ANKLE_MOVEMENT,
    DEFAULT_WALK_ANKLE_MOVEMENT,
};
use crate::error::{CoreError, CoreResult};
use crate::processing::labels::ActionLabel;

/// Number of landmarks the pose estimator reports per pose.
pub const LANDMARK_COUNT: usize = 33;

/// Normalized position of one anatomical landmark. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Keypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Planar distance to another keypoint; depth is ignored.
    pub fn distance_2d(&self, other: &Keypoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Landmarks the state machine reads, with their fixed estimator indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftAnkle,
}

impl Landmark {
    pub const fn index(self) -> usize {
        match self {
            Landmark::LeftElbow => 13,
            Landmark::RightElbow => 14,
            Landmark::LeftWrist => 15,
            Landmark::RightWrist => 16,
            Landmark::LeftAnkle => 27,
        }
    }
}

/// Ordered landmarks for one sampled instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Keypoint>", into = "Vec<Keypoint>")]
pub struct PoseFrame {
    keypoints: Vec<Keypoint>,
}

impl PoseFrame {
    /// Wraps estimator output, rejecting poses that lack the fixed landmark set.
    pub fn new(keypoints: Vec<Keypoint>) -> CoreResult<Self> {
        if keypoints.len() < LANDMARK_COUNT {
            return Err(CoreError::InvalidPose(format!(
                "expected {} landmarks, got {}",
                LANDMARK_COUNT,
                keypoints.len()
            )));
        }
        if let Some(bad) = keypoints
            .iter()
            .position(|k| !k.x.is_finite() || !k.y.is_finite())
        {
            return Err(CoreError::InvalidPose(format!(
                "landmark {bad} has a non-finite coordinate"
            )));
        }
        Ok(Self { keypoints })
    }

    pub fn landmark(&self, landmark: Landmark) -> &Keypoint {
        &self.keypoints[landmark.index()]
    }

    pub fn keypoints(&self) -> &[Keypoint] {
        &self.keypoints
    }
}

impl TryFrom<Vec<Keypoint>> for PoseFrame {
    type Error = CoreError;

    fn try_from(keypoints: Vec<Keypoint>) -> Result<Self, Self::Error> {
        PoseFrame::new(keypoints)
    }
}

impl From<PoseFrame> for Vec<Keypoint> {
    fn from(pose: PoseFrame) -> Self {
        pose.keypoints
    }
}

/// Motion thresholds for the action state machine, in normalized units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionThresholds {
    pub fight_wrist_movement: f64,
    pub run_ankle_movement: f64,
    pub walk_ankle_movement: f64,
    pub min_fighting_subjects: usize,
}

impl Default for ActionThresholds {
    fn default() -> Self {
        Self {
            fight_wrist_movement: DEFAULT_FIGHT_WRIST_MOVEMENT,
            run_ankle_movement: DEFAULT_RUN_ANKLE_MOVEMENT,
            walk_ankle_movement: DEFAULT_WALK_ANKLE_MOVEMENT,
            min_fighting_subjects: DEFAULT_MIN_FIGHTING_SUBJECTS,
        }
    }
}

/// Summed left and right wrist displacement between two poses.
pub fn wrist_movement(current: &PoseFrame, previous: Option<&PoseFrame>) -> f64 {
    previous.map_or(0.0, |prev| {
        current
            .landmark(Landmark::LeftWrist)
            .distance_2d(prev.landmark(Landmark::LeftWrist))
            + current
                .landmark(Landmark::RightWrist)
                .distance_2d(prev.landmark(Landmark::RightWrist))
    })
}

/// True when each wrist sits above the elbow on the same side.
pub fn hands_raised(pose: &PoseFrame) -> bool {
    pose.landmark(Landmark::LeftWrist).y < pose.landmark(Landmark::LeftElbow).y
        && pose.landmark(Landmark::RightWrist).y < pose.landmark(Landmark::RightElbow).y
}

/// Classifies one sample given the previous pose. Pure; see the module docs
/// for the decision order.
pub fn classify_action(
    current: Option<&PoseFrame>,
    previous: Option<&PoseFrame>,
    subject_count: usize,
    thresholds: &ActionThresholds,
) -> ActionLabel {
    let Some(current) = current else {
        return ActionLabel::NoAction;
    };

    if subject_count >= thresholds.min_fighting_subjects
        && wrist_movement(current, previous) > thresholds.fight_wrist_movement
    {
        return ActionLabel::Fighting;
    }

    if hands_raised(current) {
        return ActionLabel::RaisingHands;
    }

    if let Some(previous) = previous {
        let movement = current
            .landmark(Landmark::LeftAnkle)
            .distance_2d(previous.landmark(Landmark::LeftAnkle));
        if movement > thresholds.run_ankle_movement {
            return ActionLabel::Running;
        } else if movement > thresholds.walk_ankle_movement {
            return ActionLabel::Walking;
        }
    }

    ActionLabel::StandingStill
}

/// Carried state of the action state machine: the pose of the previous sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionState {
    previous: Option<PoseFrame>,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> Option<&PoseFrame> {
        self.previous.as_ref()
    }

    /// Advances the machine by one sample.
    ///
    /// The returned state always carries `current`, including when it is
    /// absent, so a sample without a pose resets motion tracking.
    pub fn step(
        self,
        current: Option<PoseFrame>,
        subject_count: usize,
        thresholds: &ActionThresholds,
    ) -> (ActionLabel, ActionState) {
        let label = classify_action(
            current.as_ref(),
            self.previous.as_ref(),
            subject_count,
            thresholds,
        );
        (label, ActionState { previous: current })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A neutral pose: wrists below elbows, everything at the origin otherwise.
    fn neutral_pose() -> Vec<Keypoint> {
        let mut keypoints = vec![Keypoint::new(0.0, 0.0); LANDMARK_COUNT];
        keypoints[Landmark::LeftElbow.index()] = Keypoint::new(0.4, 0.4);
        keypoints[Landmark::RightElbow.index()] = Keypoint::new(0.6, 0.4);
        keypoints[Landmark::LeftWrist.index()] = Keypoint::new(0.4, 0.6);
        keypoints[Landmark::RightWrist.index()] = Keypoint::new(0.6, 0.6);
        keypoints
    }

    fn pose(keypoints: Vec<Keypoint>) -> PoseFrame {
        PoseFrame::new(keypoints).unwrap()
    }

    #[test]
    fn test_short_pose_is_rejected() {
        let err = PoseFrame::new(vec![Keypoint::new(0.0, 0.0); 20]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPose(_)));
    }

    #[test]
    fn test_non_finite_pose_is_rejected() {
        let mut keypoints = neutral_pose();
        keypoints[3].y = f64::INFINITY;
        assert!(PoseFrame::new(keypoints).is_err());
    }

    #[test]
    fn test_pose_deserializes_from_keypoint_list() {
        let json = serde_json::to_string(&neutral_pose()).unwrap();
        let parsed: PoseFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.keypoints().len(), LANDMARK_COUNT);

        let short = serde_json::to_string(&vec![Keypoint::new(0.1, 0.1); 5]).unwrap();
        assert!(serde_json::from_str::<PoseFrame>(&short).is_err());
    }

    #[test]
    fn test_no_pose_is_no_action() {
        let thresholds = ActionThresholds::default();
        let previous = pose(neutral_pose());
        assert_eq!(
            classify_action(None, Some(&previous), 3, &thresholds),
            ActionLabel::NoAction
        );
    }

    #[test]
    fn test_wrist_movement_without_previous_is_zero() {
        assert_eq!(wrist_movement(&pose(neutral_pose()), None), 0.0);
    }

    #[test]
    fn test_single_subject_never_fights() {
        let thresholds = ActionThresholds::default();
        let previous = pose(neutral_pose());
        let mut moved = neutral_pose();
        moved[Landmark::LeftWrist.index()].x += 0.3;
        let label = classify_action(Some(&pose(moved)), Some(&previous), 1, &thresholds);
        assert_ne!(label, ActionLabel::Fighting);
    }

    #[test]
    fn test_step_carries_absent_pose() {
        let thresholds = ActionThresholds::default();
        let state = ActionState::new();
        let (_, state) = state.step(Some(pose(neutral_pose())), 1, &thresholds);
        assert!(state.previous().is_some());
        let (label, state) = state.step(None, 1, &thresholds);
        assert_eq!(label, ActionLabel::NoAction);
        assert!(state.previous().is_none());
    }
}
