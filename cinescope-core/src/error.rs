//! Error types for the cinescope-core library.
//!
//! All fallible operations return [`CoreResult`]. Classifier failures are
//! surfaced through [`CoreError::Classifier`] and abort the analysis of the
//! whole video; a missing pose or an undecodable input are not errors.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error type for the cinescope-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start command '{command}': {source}")]
    CommandStart {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Command '{command}' failed with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed waiting for command '{command}': {source}")]
    CommandWait {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("ffprobe output parsing error: {0}")]
    FfprobeParse(String),

    #[error("JSON parsing error: {0}")]
    JsonParseError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid pose data: {0}")]
    InvalidPose(String),

    #[error("Timeline ordering violated: timestamp {timestamp} does not follow {previous}")]
    TimelineOrder { previous: u64, timestamp: u64 },

    #[error("{classifier} failed on sample at {timestamp}s: {message}")]
    Classifier {
        classifier: String,
        timestamp: u64,
        message: String,
    },

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::JsonParseError(err.to_string())
    }
}

/// Result type for cinescope-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds a [`CoreError::CommandStart`] for a process that could not be spawned.
pub fn command_start_error(command: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandStart {
        command: command.into(),
        source,
    }
}

/// Builds a [`CoreError::CommandFailed`] for a process that exited unsuccessfully.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into(),
    }
}

/// Builds a [`CoreError::CommandWait`] for a process whose exit could not be collected.
pub fn command_wait_error(command: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandWait {
        command: command.into(),
        source,
    }
}

/// Builds a [`CoreError::Classifier`] tagged with the sample it failed on.
pub fn classifier_error(
    classifier: impl Into<String>,
    timestamp: u64,
    message: impl Into<String>,
) -> CoreError {
    CoreError::Classifier {
        classifier: classifier.into(),
        timestamp,
        message: message.into(),
    }
}
