//! Step aggregation across output lines

use crate::model::{OutputLine, Step};

/// Groups `Output` lines under the most recent `Step` line
///
/// Two states: no step open (initial), or one step open. Opening a new
/// step seals the current one; `finish` seals whatever is still open.
#[derive(Debug, Default)]
pub(super) struct StepAggregator {
    current: Option<Step>,
    sealed: Vec<Step>,
}

impl StepAggregator {
    /// Handle a `Step` line
    pub(super) fn open(&mut self, name: &str, detail: Option<&str>) {
        let next = Step::new(name, detail.map(str::to_string));
        if let Some(previous) = self.current.replace(next) {
            self.sealed.push(previous);
        }
    }

    /// Handle an `Output` line
    ///
    /// Returns false when no step is open; the line then belongs to no step.
    pub(super) fn record_output(&mut self, line: &OutputLine, path: Option<&str>) -> bool {
        let Some(step) = self.current.as_mut() else {
            return false;
        };

        let path = path.unwrap_or_default();
        if path.is_empty() {
            tracing::warn!(step = %step.name, line = line.as_str(), "output line without a path");
        }
        step.lines.push(line.clone());
        step.output_file_paths.push(path.to_string());
        true
    }

    /// Seal the open step and return every step in order
    pub(super) fn finish(mut self) -> Vec<Step> {
        if let Some(step) = self.current.take() {
            self.sealed.push(step);
        }
        self.sealed
    }
}
