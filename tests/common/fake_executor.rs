//! FakeExecutor helper for client tests.
//!
//! Replays canned output instead of spawning pdfToolbox.

use std::path::Path;
use std::sync::Mutex;

use pdftoolbox::toolbox::{CapturedOutput, Executor, ToolboxError};

/// An executor that records every call and returns a fixed result.
#[derive(Debug, Default)]
pub struct FakeExecutor {
    output: String,
    exit_code: Option<i32>,
    /// Written to the last argument (the report path) when set
    report: Option<String>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeExecutor {
    /// Replay `output` with the given exit code.
    pub fn new(output: &str, exit_code: i32) -> Self {
        Self {
            output: output.to_string(),
            exit_code: Some(exit_code),
            ..Default::default()
        }
    }

    /// Replay `output` from a process that ended without an exit code.
    pub fn killed(output: &str) -> Self {
        Self {
            output: output.to_string(),
            exit_code: None,
            ..Default::default()
        }
    }

    /// Also write `report` to the report file, like `--enumprofiles` does.
    pub fn with_report(mut self, report: &str) -> Self {
        self.report = Some(report.to_string());
        self
    }

    /// Arguments of every call so far.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl Executor for FakeExecutor {
    fn execute(&self, _program: &Path, args: &[String]) -> Result<CapturedOutput, ToolboxError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(args.to_vec());

        if let Some(report) = &self.report {
            let path = args.last().expect("report path argument");
            std::fs::write(path, report)?;
        }

        Ok(CapturedOutput {
            output: self.output.clone(),
            exit_code: self.exit_code,
        })
    }
}
