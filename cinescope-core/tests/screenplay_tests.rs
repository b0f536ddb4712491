// cinescope-core/tests/screenplay_tests.rs

use cinescope_core::processing::labels::{ActionLabel, ColorGrade};
use cinescope_core::processing::screenplay::{SCENE_HEADING, center_text};
use cinescope_core::processing::segmentation::segment;
use cinescope_core::{ClassificationRecord, DurationConvention, Screenplay};

fn record(timestamp: u64, action: ActionLabel) -> ClassificationRecord {
    ClassificationRecord {
        timestamp,
        objects: ["person".to_string()].into(),
        actions: vec![action],
        camera_angle: action.implied_framing(),
        shot_type: None,
        color_grade: ColorGrade::WarmTones,
        dialogue: String::new(),
    }
}

#[test]
fn rendering_is_idempotent() {
    let records = vec![
        record(0, ActionLabel::Walking),
        record(1, ActionLabel::Walking),
        record(2, ActionLabel::Running),
    ];
    let beats = segment(&records, DurationConvention::Legacy);

    let first = Screenplay::render(&beats);
    let second = Screenplay::render(&beats);
    assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
}

#[test]
fn no_action_timeline_renders_heading_only() {
    let records: Vec<_> = (0..5).map(|ts| record(ts, ActionLabel::NoAction)).collect();
    let beats = segment(&records, DurationConvention::Legacy);
    let screenplay = Screenplay::render(&beats);

    assert_eq!(screenplay.as_str(), format!("{SCENE_HEADING}\n"));
    assert_eq!(screenplay.beat_count(), 0);
}

#[test]
fn full_screenplay_text() {
    let records = vec![
        record(0, ActionLabel::Walking),
        record(1, ActionLabel::Walking),
        record(2, ActionLabel::Running),
    ];
    let beats = segment(&records, DurationConvention::Legacy);
    let screenplay = Screenplay::render(&beats);

    let expected = [
        "EXT. UNKNOWN – DAY".to_string(),
        String::new(),
        center_text("A PERSON", 80),
        center_text("WALKING.", 80),
        center_text("MEDIUM SHOT – FOR 2 SECONDS", 80),
        String::new(),
        center_text("A PERSON", 80),
        center_text("RUNNING.", 80),
        center_text("TRACKING SHOT – FOR 1 SECONDS", 80),
        String::new(),
    ]
    .join("\n");

    assert_eq!(screenplay.as_str(), expected);
}

#[test]
fn centering_matches_fixed_width_layout() {
    let line = center_text("WALKING.", 80);
    assert_eq!(line.len(), 80);
    assert_eq!(line.find('W'), Some(36));

    // 29 characters: 51 spaces of padding, 25 on the left.
    let line = center_text("TRACKING SHOT – FOR 1 SECONDS", 80);
    assert_eq!(line.chars().count(), 80);
    assert_eq!(line.find('T'), Some(25));
}
