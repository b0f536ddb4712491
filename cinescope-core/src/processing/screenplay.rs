//! Plain-text screenplay rendering.
//!
//! A screenplay is a fixed scene heading followed by one three-line block
//! per beat, every line centered in an 80 column field. Rendering depends on
//! nothing but the beats, so equal input always renders byte-identical text.

use std::fmt;

use crate::processing::segmentation::Beat;

/// Placeholder scene heading that opens every screenplay.
pub const SCENE_HEADING: &str = "EXT. UNKNOWN – DAY";

/// Width of the field beat lines are centered in.
pub const PAGE_WIDTH: usize = 80;

/// Cue line naming the subject of every beat.
pub const SUBJECT_CUE: &str = "A PERSON";

/// Centers `text` in a field of `width` characters.
///
/// Odd padding puts the extra space on the right. Text at least `width`
/// characters long is returned unchanged.
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Three centered lines describing one beat, without surrounding newlines.
pub fn render_beat(beat: &Beat) -> String {
    let action = format!("{}.", beat.action.as_str().to_uppercase());
    let framing = format!(
        "{} – FOR {} SECONDS",
        beat.framing.as_str().to_uppercase(),
        beat.duration
    );
    [
        center_text(SUBJECT_CUE, PAGE_WIDTH),
        center_text(&action, PAGE_WIDTH),
        center_text(&framing, PAGE_WIDTH),
    ]
    .join("\n")
}

/// A rendered screenplay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenplay {
    text: String,
    beat_count: usize,
}

impl Screenplay {
    /// Renders `beats` in order under the scene heading.
    pub fn render(beats: &[Beat]) -> Self {
        let mut text = format!("{SCENE_HEADING}\n");
        for beat in beats {
            text.push('\n');
            text.push_str(&render_beat(beat));
            text.push('\n');
        }
        Self {
            text,
            beat_count: beats.len(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn beat_count(&self) -> usize {
        self.beat_count
    }
}

impl fmt::Display for Screenplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::labels::{ActionLabel, Framing};
    use std::collections::BTreeSet;

    fn beat(action: ActionLabel, framing: Framing, duration: u64) -> Beat {
        Beat {
            action,
            framing,
            subjects: BTreeSet::new(),
            start: 0,
            duration,
        }
    }

    #[test]
    fn test_center_text_even_and_odd() {
        assert_eq!(center_text("ab", 6), "  ab  ");
        assert_eq!(center_text("abc", 6), " abc  ");
        assert_eq!(center_text("abcdef", 6), "abcdef");
        assert_eq!(center_text("abcdefg", 6), "abcdefg");
    }

    #[test]
    fn test_center_text_counts_characters() {
        let centered = center_text("– X", 7);
        assert_eq!(centered.chars().count(), 7);
        assert_eq!(centered, "  – X  ");
    }

    #[test]
    fn test_subject_cue_line() {
        let line = center_text(SUBJECT_CUE, PAGE_WIDTH);
        assert_eq!(line.len(), 80);
        assert_eq!(&line[..36], " ".repeat(36));
        assert!(line[36..].starts_with("A PERSON"));
    }

    #[test]
    fn test_render_single_beat() {
        let screenplay = Screenplay::render(&[beat(ActionLabel::Running, Framing::TrackingShot, 3)]);
        let lines: Vec<&str> = screenplay.as_str().split('\n').collect();

        assert_eq!(lines[0], SCENE_HEADING);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2].trim(), "A PERSON");
        assert_eq!(lines[3].trim(), "RUNNING.");
        assert_eq!(lines[4].trim(), "TRACKING SHOT – FOR 3 SECONDS");
        assert_eq!(lines[5], "");
        assert_eq!(lines.len(), 6);
        assert!(lines[2..5].iter().all(|l| l.chars().count() == PAGE_WIDTH));
        assert_eq!(screenplay.beat_count(), 1);
    }

    #[test]
    fn test_beats_are_separated_by_blank_lines() {
        let screenplay = Screenplay::render(&[
            beat(ActionLabel::Walking, Framing::MediumShot, 2),
            beat(ActionLabel::StandingStill, Framing::WideShot, 1),
        ]);
        let lines: Vec<&str> = screenplay.as_str().lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[4].trim(), "MEDIUM SHOT – FOR 2 SECONDS");
        assert_eq!(lines[5], "");
        assert_eq!(lines[7].trim(), "STANDING STILL.");
        assert_eq!(lines[8].trim(), "WIDE SHOT – FOR 1 SECONDS");
        assert!(screenplay.as_str().ends_with('\n'));
    }

    #[test]
    fn test_no_beats_renders_heading_only() {
        assert_eq!(Screenplay::render(&[]).to_string(), "EXT. UNKNOWN – DAY\n");
    }
}
