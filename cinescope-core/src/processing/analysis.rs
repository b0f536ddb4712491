// ============================================================================
// cinescope-core/src/processing/analysis.rs
// ============================================================================
//
// ANALYSIS: End-to-end scene breakdown of one video
//
// Probe -> sample -> fuse -> segment -> render. Samples are fused strictly in
// decode order; the first oracle failure aborts the analysis and no partial
// timeline is returned. An input without a usable frame rate analyzes to an
// empty timeline and a heading-only screenplay.

use std::io::Read;
use std::path::Path;

use crate::classifiers::Oracles;
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{FfmpegSpawner, FfprobeExecutor};
use crate::processing::fusion::{Fuser, Timeline};
use crate::processing::sampler::{sample_video, sampling_cadence};
use crate::processing::screenplay::Screenplay;
use crate::processing::segmentation::{Beat, DurationConvention, segment};
use crate::report::AnalysisReport;
use crate::temp_files::stage_input;
use crate::utils::format_duration;

/// Everything produced by analyzing one video.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub timeline: Timeline,
    pub beats: Vec<Beat>,
    pub screenplay: Screenplay,
}

impl AnalysisResult {
    /// Segments and renders an already fused timeline.
    pub fn from_timeline(timeline: Timeline, convention: DurationConvention) -> Self {
        let beats = segment(timeline.records(), convention);
        let screenplay = Screenplay::render(&beats);
        Self {
            timeline,
            beats,
            screenplay,
        }
    }

    /// The JSON document returned to callers of the analysis.
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport::new(&self.timeline, &self.screenplay)
    }
}

/// Analyzes the video at `input_path`.
pub fn analyze_video<S, P>(
    spawner: &S,
    prober: &P,
    oracles: Oracles<'_>,
    input_path: &Path,
    config: &CoreConfig,
) -> CoreResult<AnalysisResult>
where
    S: FfmpegSpawner,
    P: FfprobeExecutor,
{
    config.validate()?;

    if !input_path.is_file() {
        return Err(CoreError::PathError(format!(
            "Input is not a file: {}",
            input_path.display()
        )));
    }

    log::info!("Analyzing {}", input_path.display());

    let frame_rate = prober.get_frame_rate(input_path)?;
    let fps = sampling_cadence(frame_rate);
    log::debug!("Probed frame rate {frame_rate:?}, sampling every {fps} frame(s)");

    let mut timeline = Timeline::new();
    let mut fuser = Fuser::new(oracles, config);
    let samples = sample_video(spawner, input_path, fps, |frame| {
        let record = fuser.fuse(&frame)?;
        timeline.push(record)
    })?;

    let result = AnalysisResult::from_timeline(timeline, config.duration_convention);
    let covered = result.timeline.records().last().map_or(0, |r| r.timestamp + 1);
    log::info!(
        "Fused {} sample(s) covering {} into {} beat(s)",
        samples,
        format_duration(covered),
        result.beats.len()
    );

    Ok(result)
}

/// Stages `reader` into a temporary file and analyzes it.
///
/// The staged file is removed before returning, whether or not the analysis
/// succeeded.
pub fn analyze_upload<R, S, P>(
    reader: R,
    spawner: &S,
    prober: &P,
    oracles: Oracles<'_>,
    config: &CoreConfig,
) -> CoreResult<AnalysisResult>
where
    R: Read,
    S: FfmpegSpawner,
    P: FfprobeExecutor,
{
    let staged = stage_input(config, reader)?;
    analyze_video(spawner, prober, oracles, staged.path(), config)
}
