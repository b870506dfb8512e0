//! Step model for the phases of a profile run

use serde::{Deserialize, Serialize};

use super::OutputLine;

/// A named phase of the tool's pipeline, opened by a `Step` line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Step name (second field of the `Step` line, e.g. "Fixup", "Create PDF copy")
    pub name: String,
    /// Third field of the `Step` line when present (e.g. the fixup name)
    pub detail: Option<String>,
    /// `Output` lines emitted while this step was open
    pub lines: Vec<OutputLine>,
    /// File paths taken from those `Output` lines, in order
    ///
    /// One entry per line in `lines`; an `Output` line without a path
    /// contributes an empty string.
    pub output_file_paths: Vec<String>,
}

impl Step {
    /// Create an empty step
    pub fn new(name: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            name: name.into(),
            detail,
            lines: Vec::new(),
            output_file_paths: Vec::new(),
        }
    }

    /// Check if the step produced any output files
    pub fn has_outputs(&self) -> bool {
        !self.output_file_paths.is_empty()
    }
}
