//! pdfToolbox invocation layer
//!
//! This module handles building pdfToolbox command lines, running the
//! binary and turning its output into structured results.

mod args;
mod client;
pub mod constants;
mod executor;
mod invocation;
/// Parser module (public for integration testing)
pub mod parser;

pub use args::Arg;
pub use client::{Client, ClientOpts};
pub use executor::{CapturedOutput, Executor, SystemExecutor};
pub use invocation::{FailureReason, InvocationError, failure_reason};
pub use parser::Parser;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when running pdfToolbox
#[derive(Error, Debug)]
pub enum ToolboxError {
    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error("pdfToolbox executable not found: {}", .path.display())]
    ExecutableNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to decode profile list: {0}")]
    ProfileDecode(#[from] serde_json::Error),
}

impl ToolboxError {
    /// Get the invocation failure, if this error is one
    pub fn as_invocation(&self) -> Option<&InvocationError> {
        match self {
            ToolboxError::Invocation(err) => Some(err),
            _ => None,
        }
    }
}
