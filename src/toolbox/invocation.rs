//! Invocation outcome: success/failure verdict and error extraction

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::exit_codes;
use super::executor::CapturedOutput;
use super::parser::Parser;

/// A pdfToolbox run that was judged failed
///
/// `code` and `message` come from the first `Error`/`Errors` line of the
/// output; they stay at zero/empty when the output has none.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", describe_failure(.process_exit_code, .code, .message, .raw_output))]
pub struct InvocationError {
    /// Process exit code (-1 when the process had none)
    pub process_exit_code: i32,
    /// Error code reported by the tool in its output
    pub code: i64,
    /// Error message reported by the tool in its output
    pub message: String,
    /// Full captured output
    pub raw_output: String,
}

impl InvocationError {
    /// Build an error from a failed run's exit code and output
    ///
    /// Parses the output on its own, independent of the success path, and
    /// keeps the first error line found.
    pub fn extract(process_exit_code: i32, raw_output: &str) -> Self {
        let parsed = Parser::parse_output(raw_output);
        let (code, message) = parsed.errors().next().unwrap_or((0, ""));

        Self {
            process_exit_code,
            code,
            message: message.to_string(),
            raw_output: raw_output.to_string(),
        }
    }
}

fn describe_failure(process_exit_code: &i32, code: &i64, message: &str, raw_output: &str) -> String {
    let mut text = format!("pdfToolbox failed (exit code {})", process_exit_code);
    if let Some(known) = exit_codes::describe(*process_exit_code) {
        text.push_str(&format!(" [{}]", known));
    }
    if !message.is_empty() {
        text.push_str(&format!(": error {}: {}", code, message));
    } else if raw_output.trim().is_empty() {
        text.push_str(": no output");
    }
    text
}

/// Why a run was judged failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The process produced no output
    EmptyOutput,
    /// Exit code at or above the fatal threshold
    FatalExitCode(i32),
    /// The process ended without an exit code
    Abnormal,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::EmptyOutput => write!(f, "empty output"),
            FailureReason::FatalExitCode(code) => write!(f, "fatal exit code {}", code),
            FailureReason::Abnormal => write!(f, "terminated without exit code"),
        }
    }
}

/// Decide whether a finished process counts as failed
///
/// Exit codes 1..=99 report hits (warnings, infos) and are successes.
pub fn failure_reason(captured: &CapturedOutput) -> Option<FailureReason> {
    match captured.exit_code {
        None => Some(FailureReason::Abnormal),
        Some(code) if code >= exit_codes::FATAL_THRESHOLD || code < 0 => {
            Some(FailureReason::FatalExitCode(code))
        }
        Some(_) if captured.output.is_empty() => Some(FailureReason::EmptyOutput),
        Some(_) => None,
    }
}
