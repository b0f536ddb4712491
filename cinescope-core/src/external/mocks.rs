// cinescope-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{FfmpegProcess, FfmpegSpawner, FfprobeExecutor};
use crate::error::{CoreError, CoreResult};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, OutputFrame};
use std::cell::RefCell;
use std::collections::HashMap;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

/// Builds an rgb24 output frame event filled with one color.
pub fn solid_frame_event(width: u32, height: u32, rgb: [u8; 3]) -> FfmpegEvent {
    let data = rgb
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 3)
        .collect();
    FfmpegEvent::OutputFrame(OutputFrame {
        width,
        height,
        pix_fmt: "rgb24".to_string(),
        output_index: 0,
        data,
        frame_num: 0,
        timestamp: 0.0,
    })
}

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Rc<RefCell<Vec<FfmpegEvent>>>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
    /// Lifecycle calls ("wait", "kill") in order, shared with the spawner.
    pub lifecycle: Rc<RefCell<Vec<&'static str>>>,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let events = self.events_to_emit.borrow().clone();
        for event in events {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.lifecycle.borrow_mut().push("wait");
        Ok(self.exit_status)
    }

    fn kill(&mut self) -> CoreResult<()> {
        self.lifecycle.borrow_mut().push("kill");
        Ok(())
    }
}

/// Represents an expected ffmpeg command call and its mock result.
pub struct MockFfmpegExpectation {
    pub arg_pattern: String,
    pub result: CoreResult<MockFfmpegProcess>,
}

/// Mock implementation of FfmpegSpawner supporting multiple expectations.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    expectations: Rc<RefCell<Vec<MockFfmpegExpectation>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
    lifecycle: Rc<RefCell<Vec<&'static str>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_expectation(&self, arg_pattern: &str, result: CoreResult<MockFfmpegProcess>) {
        self.expectations.borrow_mut().push(MockFfmpegExpectation {
            arg_pattern: arg_pattern.to_string(),
            result,
        });
    }

    pub fn add_success_expectation(&self, arg_pattern: &str, events: Vec<FfmpegEvent>) {
        let process = MockFfmpegProcess {
            events_to_emit: Rc::new(RefCell::new(events)),
            exit_status: ExitStatus::from_raw(0),
            lifecycle: Rc::default(),
        };
        self.add_expectation(arg_pattern, Ok(process));
    }

    pub fn add_spawn_error_expectation(&self, arg_pattern: &str, error: CoreError) {
        self.add_expectation(arg_pattern, Err(error));
    }

    /// Emits `events`, then reports a non-zero exit (raw wait status).
    pub fn add_exit_error_expectation(
        &self,
        arg_pattern: &str,
        events: Vec<FfmpegEvent>,
        exit_code: i32,
    ) {
        let process = MockFfmpegProcess {
            events_to_emit: Rc::new(RefCell::new(events)),
            exit_status: ExitStatus::from_raw(exit_code << 8),
            lifecycle: Rc::default(),
        };
        self.add_expectation(arg_pattern, Ok(process));
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }

    /// Wait/kill calls made on spawned processes, in order.
    pub fn get_process_lifecycle(&self) -> Vec<&'static str> {
        self.lifecycle.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        let mut expectations = self.expectations.borrow_mut();
        let found_index = expectations
            .iter()
            .position(|exp| args.iter().any(|arg| arg.contains(&exp.arg_pattern)));

        match found_index {
            Some(index) => {
                let expectation = expectations.remove(index);
                log::info!(
                    "MockFfmpegSpawner: Matched expectation with pattern '{}'",
                    expectation.arg_pattern
                );
                expectation.result.map(|mut process| {
                    process.lifecycle = Rc::clone(&self.lifecycle);
                    process
                })
            }
            None => {
                log::error!("MockFfmpegSpawner: No expectation found for command args: {args:?}");
                panic!("MockFfmpegSpawner: No expectation found for command args: {args:?}");
            }
        }
    }
}

/// Mock implementation of FfprobeExecutor.
#[derive(Clone, Default)]
pub struct MockFfprobeExecutor {
    frame_rate_results: Rc<RefCell<HashMap<PathBuf, Option<f64>>>>,
    fallback_frame_rate: Rc<RefCell<Option<Option<f64>>>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the frame rate reported for `input_path`.
    pub fn expect_frame_rate(&self, input_path: &Path, rate: Option<f64>) {
        self.frame_rate_results
            .borrow_mut()
            .insert(input_path.to_path_buf(), rate);
    }

    /// Sets the frame rate reported for paths without their own expectation,
    /// such as randomly named staged uploads.
    pub fn expect_any_frame_rate(&self, rate: Option<f64>) {
        *self.fallback_frame_rate.borrow_mut() = Some(rate);
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn get_frame_rate(&self, input_path: &Path) -> CoreResult<Option<f64>> {
        match self.frame_rate_results.borrow().get(input_path) {
            Some(rate) => Ok(*rate),
            None if self.fallback_frame_rate.borrow().is_some() => {
                Ok(self.fallback_frame_rate.borrow().flatten())
            }
            None => Err(CoreError::FfprobeParse(format!(
                "MockFfprobeExecutor: No expectation set for path {}",
                input_path.display()
            ))),
        }
    }
}
