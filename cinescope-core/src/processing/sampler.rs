// ============================================================================
// cinescope-core/src/processing/sampler.rs
// ============================================================================
//
// SAMPLER: One frame per second of source time
//
// Decodes the input sequentially through ffmpeg and selects the first frame of
// every whole second. Frame indices are counted here rather than trusted from
// the decoder, so selection only depends on decode order.
//
// A frame with index `i` is selected when `i % fps == 0` and is stamped with
// `i / fps`. Frames after the last selected one in a trailing partial second
// yield nothing. A frame rate of zero selects nothing.

use crate::error::CoreResult;
use crate::external::{FfmpegProcess, FfmpegSpawner, build_decode_command};

use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::path::Path;

/// A decoded rgb24 frame selected by the sampler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    /// Zero-based decode index of the frame.
    pub index: u64,
    /// Whole-second offset of the frame.
    pub timestamp: u64,
    pub width: u32,
    pub height: u32,
    /// Packed rgb24 pixels, row-major.
    pub data: Vec<u8>,
}

/// Converts a probed frame rate to the integer sampling cadence.
///
/// The rate is truncated, so 29.97 fps samples every 29 frames. Unknown or
/// sub-1 rates give a cadence of zero.
#[must_use]
pub fn sampling_cadence(frame_rate: Option<f64>) -> u64 {
    match frame_rate {
        Some(rate) if rate.is_finite() && rate >= 1.0 => rate.trunc() as u64,
        _ => 0,
    }
}

/// True when frame `index` is the first frame of a whole second.
#[must_use]
pub fn is_sample_frame(index: u64, fps: u64) -> bool {
    fps != 0 && index % fps == 0
}

/// Timestamp in whole seconds of frame `index`.
#[must_use]
pub fn sample_timestamp(index: u64, fps: u64) -> u64 {
    if fps == 0 { 0 } else { index / fps }
}

/// Counts decoded frames and keeps one per second.
#[derive(Debug, Clone)]
pub struct SecondSampler {
    fps: u64,
    next_index: u64,
}

impl SecondSampler {
    pub fn new(fps: u64) -> Self {
        Self { fps, next_index: 0 }
    }

    pub fn fps(&self) -> u64 {
        self.fps
    }

    /// Number of frames offered so far.
    pub fn frames_seen(&self) -> u64 {
        self.next_index
    }

    /// Offers the next decoded frame, returning it when it is a sample.
    pub fn offer(&mut self, width: u32, height: u32, data: Vec<u8>) -> Option<VideoFrame> {
        let index = self.next_index;
        self.next_index += 1;

        is_sample_frame(index, self.fps).then(|| VideoFrame {
            index,
            timestamp: sample_timestamp(index, self.fps),
            width,
            height,
            data,
        })
    }
}

/// Decodes `input_path` and hands every selected frame to `on_sample` in
/// timestamp order.
///
/// Returns the number of samples delivered. An error returned by `on_sample`
/// stops decoding and is propagated unchanged. A non-zero ffmpeg exit keeps
/// the samples already delivered and is only logged.
pub fn sample_video<S, F>(
    spawner: &S,
    input_path: &Path,
    fps: u64,
    mut on_sample: F,
) -> CoreResult<u64>
where
    S: FfmpegSpawner,
    F: FnMut(VideoFrame) -> CoreResult<()>,
{
    if fps == 0 {
        log::warn!(
            "No usable frame rate for {}, skipping decode",
            input_path.display()
        );
        return Ok(0);
    }

    log::debug!(
        "Sampling {} at one frame every {} frames",
        input_path.display(),
        fps
    );

    let mut sampler = SecondSampler::new(fps);
    let mut delivered = 0u64;
    let mut child = spawner.spawn(build_decode_command(input_path))?;

    let handled = child.handle_events(|event| {
        match event {
            FfmpegEvent::OutputFrame(frame) => {
                if let Some(sample) = sampler.offer(frame.width, frame.height, frame.data) {
                    log::trace!(
                        "Sampled frame {} at {}s ({}x{})",
                        sample.index,
                        sample.timestamp,
                        sample.width,
                        sample.height
                    );
                    on_sample(sample)?;
                    delivered += 1;
                }
            }
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) | FfmpegEvent::Error(line) => {
                log::debug!("ffmpeg: {line}");
            }
            _ => {}
        }
        Ok(())
    });

    if let Err(e) = handled {
        // The child must be reaped on every exit path.
        if let Err(kill_err) = child.kill() {
            log::debug!("Could not kill ffmpeg after failure: {kill_err}");
        }
        if let Err(wait_err) = child.wait() {
            log::warn!("Failed to reap ffmpeg after failure: {wait_err}");
        }
        return Err(e);
    }

    let status = child.wait()?;
    if !status.success() {
        log::warn!(
            "ffmpeg exited with {} while decoding {}; keeping {} sample(s) from {} decoded frame(s)",
            status,
            input_path.display(),
            delivered,
            sampler.frames_seen()
        );
    }

    Ok(delivered)
}
