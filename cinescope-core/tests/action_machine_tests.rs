// cinescope-core/tests/action_machine_tests.rs

use cinescope_core::processing::action::{
    ActionState, ActionThresholds, Keypoint, LANDMARK_COUNT, Landmark, PoseFrame,
};
use cinescope_core::processing::labels::{ActionLabel, Framing};

/// Wrists below elbows, ankle at the given x.
fn pose(left_wrist: (f64, f64), right_wrist: (f64, f64), ankle_x: f64) -> PoseFrame {
    let mut keypoints = vec![Keypoint::new(0.5, 0.5); LANDMARK_COUNT];
    keypoints[Landmark::LeftElbow.index()] = Keypoint::new(0.4, 0.4);
    keypoints[Landmark::RightElbow.index()] = Keypoint::new(0.6, 0.4);
    keypoints[Landmark::LeftWrist.index()] = Keypoint::new(left_wrist.0, left_wrist.1);
    keypoints[Landmark::RightWrist.index()] = Keypoint::new(right_wrist.0, right_wrist.1);
    keypoints[Landmark::LeftAnkle.index()] = Keypoint::new(ankle_x, 0.9);
    PoseFrame::new(keypoints).unwrap()
}

fn resting(ankle_x: f64) -> PoseFrame {
    pose((0.4, 0.6), (0.6, 0.6), ankle_x)
}

fn step_pair(previous: PoseFrame, current: PoseFrame, subjects: usize) -> ActionLabel {
    let thresholds = ActionThresholds::default();
    let (_, state) = ActionState::new().step(Some(previous), subjects, &thresholds);
    let (label, _) = state.step(Some(current), subjects, &thresholds);
    label
}

#[test]
fn raised_hands_without_history() {
    let hands_up = pose((0.4, 0.2), (0.6, 0.2), 0.5);
    let (label, state) =
        ActionState::new().step(Some(hands_up.clone()), 1, &ActionThresholds::default());

    assert_eq!(label, ActionLabel::RaisingHands);
    assert_eq!(label.implied_framing(), Framing::WideShot);
    assert_eq!(state.previous(), Some(&hands_up));
}

#[test]
fn fighting_takes_precedence_over_raised_hands() {
    // Both wrists rise by 0.125 each: summed displacement 0.25, and both end
    // up above their elbows.
    let before = pose((0.4, 0.3), (0.6, 0.3), 0.5);
    let after = pose((0.4, 0.175), (0.6, 0.175), 0.5);

    assert_eq!(step_pair(before.clone(), after.clone(), 2), ActionLabel::Fighting);
    assert_eq!(step_pair(before, after, 1), ActionLabel::RaisingHands);
}

#[test]
fn running_threshold_is_strict() {
    assert_eq!(step_pair(resting(0.0), resting(0.1), 1), ActionLabel::Walking);
    assert_eq!(step_pair(resting(0.0), resting(0.10001), 1), ActionLabel::Running);
}

#[test]
fn walking_threshold_is_strict() {
    assert_eq!(
        step_pair(resting(0.0), resting(0.05), 1),
        ActionLabel::StandingStill
    );
    assert_eq!(step_pair(resting(0.0), resting(0.06), 1), ActionLabel::Walking);
}

#[test]
fn absent_pose_resets_history() {
    let thresholds = ActionThresholds::default();
    let (_, state) = ActionState::new().step(Some(resting(0.0)), 1, &thresholds);
    let (label, state) = state.step(None, 1, &thresholds);
    assert_eq!(label, ActionLabel::NoAction);
    assert!(state.previous().is_none());

    // Without history a large ankle jump is not motion.
    let (label, _) = state.step(Some(resting(0.9)), 1, &thresholds);
    assert_eq!(label, ActionLabel::StandingStill);
}

#[test]
fn custom_thresholds_are_honoured() {
    let thresholds = ActionThresholds {
        run_ankle_movement: 0.5,
        walk_ankle_movement: 0.3,
        ..ActionThresholds::default()
    };
    let (_, state) = ActionState::new().step(Some(resting(0.0)), 1, &thresholds);
    let (label, _) = state.step(Some(resting(0.4)), 1, &thresholds);
    assert_eq!(label, ActionLabel::Walking);
}
