//! Temporary file management utilities.
//!
//! Streamed input (an upload or stdin) is staged into a named temporary file
//! so ffprobe and ffmpeg can open it by path. The tempfile crate removes the
//! file when the returned guard is dropped, on success and error paths alike.

use crate::config::CoreConfig;
use crate::error::CoreResult;
use std::io::{Read, Write};
use std::path::PathBuf;
use tempfile::{Builder as TempFileBuilder, NamedTempFile};

/// Prefix of staged input files.
pub const STAGED_INPUT_PREFIX: &str = "cinescope_input_";

/// Extension given to staged input files.
pub const STAGED_INPUT_SUFFIX: &str = ".mp4";

/// Directory temp files are created in: the configured temp dir, or the
/// system default.
pub fn temp_base_dir(config: &CoreConfig) -> PathBuf {
    config
        .temp_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir)
}

/// Copies `reader` into a new temporary file. Auto-deleted when dropped.
pub fn stage_input<R: Read>(config: &CoreConfig, mut reader: R) -> CoreResult<NamedTempFile> {
    let base = temp_base_dir(config);
    std::fs::create_dir_all(&base)?;

    let mut staged = TempFileBuilder::new()
        .prefix(STAGED_INPUT_PREFIX)
        .suffix(STAGED_INPUT_SUFFIX)
        .tempfile_in(&base)?;

    let bytes = std::io::copy(&mut reader, &mut staged)?;
    staged.flush()?;

    log::debug!(
        "Staged {} byte(s) of input at {}",
        bytes,
        staged.path().display()
    );
    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfigBuilder;

    #[test]
    fn test_stage_input_writes_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfigBuilder::new()
            .temp_dir(dir.path().to_path_buf())
            .build();

        let staged = stage_input(&config, &b"not really a video"[..]).unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.starts_with(dir.path()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("mp4"));
        assert_eq!(std::fs::read(&path).unwrap(), b"not really a video");

        drop(staged);
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_base_dir_defaults_to_system() {
        assert_eq!(temp_base_dir(&CoreConfig::default()), std::env::temp_dir());
    }
}
