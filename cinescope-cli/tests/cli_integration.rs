use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const TIMELINE: &str = r#"{
    "0": {"objects": ["person"], "actions": ["Walking"], "camera_angle": "Medium Shot",
          "color_grade": "Warm Tones", "dialogue": ""},
    "1": {"objects": ["person"], "actions": ["Walking"], "camera_angle": "Medium Shot",
          "color_grade": "Warm Tones", "dialogue": ""},
    "2": {"objects": ["person"], "actions": ["Running"], "camera_angle": "Tracking Shot",
          "shot_type": "Close-Up", "color_grade": "Cool Tones", "dialogue": ""}
}"#;

// Helper function to get the path to the compiled binary
fn cinescope_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cinescope").expect("Failed to find cinescope binary");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_timeline(dir: &std::path::Path) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join("timeline.json");
    fs::write(&path, TIMELINE)?;
    Ok(path)
}

#[test]
fn test_render_prints_screenplay_to_stdout() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let timeline = write_timeline(dir.path())?;

    cinescope_cmd()
        .arg("render")
        .arg("--timeline")
        .arg(&timeline)
        .assert()
        .success()
        .stdout(contains("EXT. UNKNOWN – DAY"))
        .stdout(contains("MEDIUM SHOT – FOR 2 SECONDS"))
        .stdout(contains("TRACKING SHOT – FOR 1 SECONDS"))
        .stderr(contains("Beats:"));

    Ok(())
}

#[test]
fn test_render_json_report() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let timeline = write_timeline(dir.path())?;

    let output = cinescope_cmd()
        .arg("render")
        .arg("--timeline")
        .arg(&timeline)
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["analysis"]["shot_type"], "Medium Shot");
    assert_eq!(report["analysis"]["color_grade"], "Warm Tones");
    assert!(
        report["screenplay"]
            .as_str()
            .is_some_and(|text| text.starts_with("EXT. UNKNOWN – DAY\n"))
    );

    Ok(())
}

#[test]
fn test_render_to_output_file_with_classifier_framing() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let timeline = write_timeline(dir.path())?;
    let output = dir.path().join("scene.txt");

    cinescope_cmd()
        .arg("render")
        .arg("--timeline")
        .arg(&timeline)
        .arg("--framing-source")
        .arg("classifier")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = fs::read_to_string(&output)?;
    assert!(text.contains("CLOSE-UP – FOR 1 SECONDS"));
    Ok(())
}

#[test]
fn test_render_writes_log_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let timeline = write_timeline(dir.path())?;
    let log_dir = dir.path().join("logs");
    fs::create_dir(&log_dir)?;

    cinescope_cmd()
        .arg("render")
        .arg("--timeline")
        .arg(&timeline)
        .arg("--log-dir")
        .arg(&log_dir)
        .assert()
        .success();

    let logs: Vec<_> = fs::read_dir(&log_dir)?.collect::<Result<_, _>>()?;
    assert_eq!(logs.len(), 1);
    let name = logs[0].file_name().to_string_lossy().into_owned();
    assert!(name.starts_with("cinescope_render_"));
    Ok(())
}

#[test]
fn test_render_missing_timeline_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    cinescope_cmd()
        .arg("render")
        .arg("--timeline")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("Failed to read timeline"));

    Ok(())
}

#[test]
fn test_render_rejects_malformed_timeline() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"0\": {\"actions\": [\"Dancing\"]}}")?;

    cinescope_cmd()
        .arg("render")
        .arg("--timeline")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("JSON parsing error"));

    Ok(())
}

#[test]
fn test_invalid_value_enums_are_rejected() {
    cinescope_cmd()
        .args(["render", "--timeline", "t.json", "--framing-source", "drone"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));

    cinescope_cmd()
        .args(["render", "--timeline", "t.json", "--duration-convention", "median"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_analyze_rejects_invalid_confidence() {
    cinescope_cmd()
        .args(["analyze", "--input", "clip.mp4", "--confidence", "1.5"])
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));
}

#[test]
fn test_analyze_requires_input() {
    cinescope_cmd()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(contains("--input"));
}

#[test]
fn test_help_lists_subcommands() {
    cinescope_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("analyze"))
        .stdout(contains("render"));
}
