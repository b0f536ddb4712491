//! Closed label sets shared by the classifiers, the fusion step and the
//! screenplay renderer.
//!
//! Labels serialize to the exact display strings used in timeline documents,
//! so a saved timeline can be segmented and rendered again without loss.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Action inferred for one sample by the action state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionLabel {
    #[serde(rename = "No action detected")]
    NoAction,
    #[serde(rename = "Fighting")]
    Fighting,
    #[serde(rename = "Raising Hands")]
    RaisingHands,
    #[serde(rename = "Running")]
    Running,
    #[serde(rename = "Walking")]
    Walking,
    #[serde(rename = "Standing Still")]
    StandingStill,
}

impl ActionLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionLabel::NoAction => "No action detected",
            ActionLabel::Fighting => "Fighting",
            ActionLabel::RaisingHands => "Raising Hands",
            ActionLabel::Running => "Running",
            ActionLabel::Walking => "Walking",
            ActionLabel::StandingStill => "Standing Still",
        }
    }

    /// True for the sentinel emitted when no pose was found.
    pub fn is_no_action(self) -> bool {
        self == ActionLabel::NoAction
    }

    /// Camera framing implied by the action: running subjects are tracked,
    /// walking subjects get a medium shot, everything else is wide.
    pub fn implied_framing(self) -> Framing {
        match self {
            ActionLabel::Running => Framing::TrackingShot,
            ActionLabel::Walking => Framing::MediumShot,
            _ => Framing::WideShot,
        }
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera shot type, from either the action-derived mapping or the framing
/// classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Framing {
    #[serde(rename = "Wide Shot")]
    WideShot,
    #[serde(rename = "Medium Shot")]
    MediumShot,
    #[serde(rename = "Close-Up")]
    CloseUp,
    #[serde(rename = "Tracking Shot")]
    TrackingShot,
}

impl Framing {
    pub fn as_str(self) -> &'static str {
        match self {
            Framing::WideShot => "Wide Shot",
            Framing::MediumShot => "Medium Shot",
            Framing::CloseUp => "Close-Up",
            Framing::TrackingShot => "Tracking Shot",
        }
    }
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color grading style reported by the color grade classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorGrade {
    #[serde(rename = "Black & White")]
    BlackAndWhite,
    #[serde(rename = "Desaturated")]
    Desaturated,
    #[serde(rename = "Warm Tones")]
    WarmTones,
    #[serde(rename = "Cool Tones")]
    CoolTones,
    #[serde(rename = "Balanced / Natural")]
    BalancedNatural,
    /// Sentinel for frames the classifier could not grade.
    #[serde(rename = "Uncategorized")]
    Unclassified,
}

impl ColorGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorGrade::BlackAndWhite => "Black & White",
            ColorGrade::Desaturated => "Desaturated",
            ColorGrade::WarmTones => "Warm Tones",
            ColorGrade::CoolTones => "Cool Tones",
            ColorGrade::BalancedNatural => "Balanced / Natural",
            ColorGrade::Unclassified => "Uncategorized",
        }
    }
}

impl fmt::Display for ColorGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implied_framing() {
        assert_eq!(ActionLabel::Running.implied_framing(), Framing::TrackingShot);
        assert_eq!(ActionLabel::Walking.implied_framing(), Framing::MediumShot);
        for action in [
            ActionLabel::NoAction,
            ActionLabel::Fighting,
            ActionLabel::RaisingHands,
            ActionLabel::StandingStill,
        ] {
            assert_eq!(action.implied_framing(), Framing::WideShot);
        }
    }

    #[test]
    fn test_serde_uses_display_strings() {
        for action in [
            ActionLabel::NoAction,
            ActionLabel::Fighting,
            ActionLabel::RaisingHands,
            ActionLabel::Running,
            ActionLabel::Walking,
            ActionLabel::StandingStill,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
        assert_eq!(
            serde_json::from_str::<Framing>("\"Close-Up\"").unwrap(),
            Framing::CloseUp
        );
        assert_eq!(
            serde_json::from_str::<ColorGrade>("\"Balanced / Natural\"").unwrap(),
            ColorGrade::BalancedNatural
        );
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!(serde_json::from_str::<ActionLabel>("\"Dancing\"").is_err());
        assert!(serde_json::from_str::<Framing>("\"Dutch Angle\"").is_err());
    }
}
