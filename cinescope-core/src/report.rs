//! The JSON document describing one analyzed video.
//!
//! ```json
//! {
//!   "screenplay": "EXT. UNKNOWN – DAY\n...",
//!   "analysis": { "shot_type": "Wide Shot", "color_grade": "Warm Tones" }
//! }
//! ```
//!
//! The summary labels come from the first timeline record.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::processing::fusion::Timeline;
use crate::processing::screenplay::Screenplay;

/// Shot type reported when the timeline is empty.
pub const UNKNOWN_SHOT_TYPE: &str = "Unknown";

/// Color grade reported when the timeline is empty.
pub const UNKNOWN_COLOR_GRADE: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub shot_type: String,
    pub color_grade: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub screenplay: String,
    pub analysis: AnalysisSummary,
}

impl AnalysisReport {
    pub fn new(timeline: &Timeline, screenplay: &Screenplay) -> Self {
        let analysis = match timeline.first() {
            Some(first) => AnalysisSummary {
                shot_type: first.reported_shot_type().to_string(),
                color_grade: first.color_grade.to_string(),
            },
            None => AnalysisSummary {
                shot_type: UNKNOWN_SHOT_TYPE.to_string(),
                color_grade: UNKNOWN_COLOR_GRADE.to_string(),
            },
        };
        Self {
            screenplay: screenplay.as_str().to_string(),
            analysis,
        }
    }

    pub fn to_json_string_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
