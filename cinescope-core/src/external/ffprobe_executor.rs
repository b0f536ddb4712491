//! FFprobe integration for frame rate detection.
//!
//! The sampler needs the integer frame rate of the input to pick the first
//! frame of every second. Inputs ffprobe cannot read are reported as having
//! no frame rate so the analysis degrades to an empty timeline; a missing
//! ffprobe binary is still an error.
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::utils::parse_frame_rate;
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Trait for probing stream properties of an input file.
pub trait FfprobeExecutor {
    /// Returns the video frame rate in frames per second, or `None` when the
    /// input has no decodable video stream.
    fn get_frame_rate(&self, input_path: &Path) -> CoreResult<Option<f64>>;
}

/// Concrete implementation of `FfprobeExecutor` using the `ffprobe` crate.
#[derive(Debug, Clone, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl FfprobeExecutor for CrateFfprobeExecutor {
    fn get_frame_rate(&self, input_path: &Path) -> CoreResult<Option<f64>> {
        log::debug!(
            "Running ffprobe (via crate) for frame rate on: {}",
            input_path.display()
        );
        match ffprobe(input_path) {
            Ok(metadata) => {
                let Some(video_stream) = metadata
                    .streams
                    .iter()
                    .find(|s| s.codec_type.as_deref() == Some("video"))
                else {
                    log::warn!("No video stream found in {}", input_path.display());
                    return Ok(None);
                };

                let rate = parse_frame_rate(&video_stream.avg_frame_rate)
                    .or_else(|| parse_frame_rate(&video_stream.r_frame_rate));
                log::debug!(
                    "Frame rate for {}: {:?} (avg {}, r {})",
                    input_path.display(),
                    rate,
                    video_stream.avg_frame_rate,
                    video_stream.r_frame_rate
                );
                Ok(rate)
            }
            Err(FfProbeError::Io(io_err)) => Err(command_start_error("ffprobe (frame rate)", io_err)),
            Err(err) => {
                log::warn!(
                    "ffprobe could not read {}, treating as undecodable: {}",
                    input_path.display(),
                    describe_ffprobe_error(&err)
                );
                Ok(None)
            }
        }
    }
}

fn describe_ffprobe_error(err: &FfProbeError) -> String {
    match err {
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error("ffprobe (frame rate)", output.status, stderr).to_string()
        }
        FfProbeError::Deserialize(err) => CoreError::JsonParseError(format!(
            "ffprobe frame rate output deserialization: {err}"
        ))
        .to_string(),
        _ => CoreError::FfprobeParse(format!("Unknown ffprobe error: {err:?}")).to_string(),
    }
}
