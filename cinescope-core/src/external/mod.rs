// ============================================================================
// cinescope-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates interactions with the ffmpeg and ffprobe command
// line tools behind traits, so the sampler can be driven by the real tools or
// by scripted mocks.
//
// KEY COMPONENTS:
// - FfmpegSpawner / FfmpegProcess: frame decoding through ffmpeg-sidecar
// - FfprobeExecutor: frame rate probing through the ffprobe crate
// - Dependency checking

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_start_error};

// ---- Standard library imports ----
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Contains traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

/// Scripted ffmpeg/ffprobe stand-ins for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_executor::{
    FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner, build_decode_command,
};
pub use ffprobe_executor::{CrateFfprobeExecutor, FfprobeExecutor};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that a required external command can be started.
///
/// Runs `<cmd_name> -version` and discards the output.
///
/// # Returns
///
/// * `Ok(())` - If the command started and exited successfully
/// * `Err(CoreError::CommandStart)` - If the command could not be started
/// * `Err(CoreError::OperationFailed)` - If the command exited unsuccessfully
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let status = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| command_start_error(cmd_name, e))?;

    if status.success() {
        log::debug!("Found dependency: {cmd_name}");
        Ok(())
    } else {
        Err(CoreError::OperationFailed(format!(
            "'{cmd_name} -version' exited with {status}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_is_command_start_error() {
        let result = check_dependency("cinescope-definitely-not-a-real-binary");
        assert!(matches!(result, Err(CoreError::CommandStart { .. })));
    }
}
