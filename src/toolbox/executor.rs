//! pdfToolbox process executor
//!
//! Handles spawning the binary and capturing its output.

use std::path::Path;
use std::process::Command;

use super::ToolboxError;
use super::constants::LINE_SEPARATOR;

/// Output captured from one finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// stdout followed by stderr (lossy UTF-8)
    pub output: String,
    /// Exit code, `None` if the process was terminated by a signal
    pub exit_code: Option<i32>,
}

/// Runs an external program to completion
///
/// The client only ever talks to the process through this trait, so tests
/// can replay canned output without a pdfToolbox installation.
pub trait Executor: Send + Sync {
    /// Run `program` with `args` and block until it exits
    fn execute(&self, program: &Path, args: &[String]) -> Result<CapturedOutput, ToolboxError>;
}

/// Executor backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn execute(&self, program: &Path, args: &[String]) -> Result<CapturedOutput, ToolboxError> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ToolboxError::ExecutableNotFound {
                    path: program.to_path_buf(),
                }
            } else {
                ToolboxError::Io(e)
            }
        })?;

        Ok(CapturedOutput {
            output: combine_streams(&output.stdout, &output.stderr),
            exit_code: output.status.code(),
        })
    }
}

/// Append stderr to stdout, starting it on a fresh line
fn combine_streams(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).into_owned();
    if !stderr.is_empty() && !combined.is_empty() && !combined.ends_with(LINE_SEPARATOR) {
        combined.push(LINE_SEPARATOR);
    }
    combined.push_str(&String::from_utf8_lossy(stderr));
    combined
}
