//! Parsed result of a pdfToolbox invocation

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{OutputLine, Step};

/// Structured view of one pdfToolbox run
///
/// Built by the output parser; `command`, `exit_code` and `elapsed` are
/// filled in by the client after the process has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Full command line used to invoke the tool
    pub command: String,
    /// Captured output, byte-for-byte
    pub raw: String,
    /// Every non-empty output line, in order
    pub lines: Vec<OutputLine>,
    /// Steps in the order their `Step` lines appeared
    pub steps: Vec<Step>,
    /// Duration reported by the tool's `Duration` line (zero if absent)
    pub duration: Duration,
    /// Process exit code
    pub exit_code: i32,
    /// Wall-clock time of the call as measured by the client
    pub elapsed: Duration,
}

impl ParseResult {
    /// Iterate over error lines as `(code, message)`
    pub fn errors(&self) -> impl Iterator<Item = (i64, &str)> {
        self.lines.iter().filter_map(OutputLine::as_error)
    }

    /// All output file paths across every step, in order
    pub fn output_file_paths(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .flat_map(|step| step.output_file_paths.iter().map(String::as_str))
    }

    /// Find the first step with the given name
    pub fn find_step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_with_outputs(name: &str, paths: &[&str]) -> Step {
        let mut step = Step::new(name, None);
        step.output_file_paths = paths.iter().map(|p| p.to_string()).collect();
        step
    }

    #[test]
    fn test_output_file_paths_across_steps() {
        let result = ParseResult {
            steps: vec![
                step_with_outputs("Create PDF copy", &["/out/a.pdf"]),
                step_with_outputs("File Pickup", &[]),
                step_with_outputs("Rename PDF", &["/out/b.pdf", "/out/c.pdf"]),
            ],
            ..Default::default()
        };

        let paths: Vec<&str> = result.output_file_paths().collect();
        assert_eq!(paths, vec!["/out/a.pdf", "/out/b.pdf", "/out/c.pdf"]);
    }

    #[test]
    fn test_find_step_returns_first_match() {
        let result = ParseResult {
            steps: vec![
                step_with_outputs("Create PDF copy", &["/out/first.pdf"]),
                step_with_outputs("Create PDF copy", &["/out/second.pdf"]),
            ],
            ..Default::default()
        };

        let step = result.find_step("Create PDF copy").unwrap();
        assert_eq!(step.output_file_paths, vec!["/out/first.pdf"]);
        assert!(result.find_step("Rename PDF").is_none());
    }

    #[test]
    fn test_errors_skips_other_kinds() {
        let result = ParseResult {
            lines: vec![
                OutputLine::Identity {
                    line: "Hit\tError\tTrim box".to_string(),
                    parts: vec!["Hit".to_string(), "Error".to_string(), "Trim box".to_string()],
                },
                OutputLine::Error {
                    line: "Errors\t1\tTrim box".to_string(),
                    code: 1,
                    message: "Trim box".to_string(),
                },
            ],
            ..Default::default()
        };

        let errors: Vec<(i64, &str)> = result.errors().collect();
        assert_eq!(errors, vec![(1, "Trim box")]);
    }
}
