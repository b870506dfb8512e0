//! pdfToolbox output parser
//!
//! Parses the line-oriented, TAB-separated progress log into structured data.
//!
//! The log has no published grammar and differs between tool versions, so the
//! parser never fails: unknown tokens are kept verbatim and unreadable fields
//! are logged and zeroed.

mod line;
mod step;


use super::constants::{FIELD_SEPARATOR, LINE_SEPARATOR, tokens};
use crate::model::{OutputLine, ParseResult};
use step::StepAggregator;

/// Parser for pdfToolbox output
pub struct Parser;

impl Parser {
    /// Parse the captured output of one run
    ///
    /// - Splits on `\n` and skips zero-length lines; every other line is
    ///   classified and kept in `lines`.
    /// - `Step` lines open a new step, `Output` lines attach their path to the
    ///   open step.
    /// - The last `Duration` line sets `duration`.
    /// - `raw` is the input, unmodified.
    ///
    /// `command`, `exit_code` and `elapsed` are left at their defaults.
    pub fn parse_output(output: &str) -> ParseResult {
        let mut result = ParseResult {
            raw: output.to_string(),
            ..Default::default()
        };
        let mut steps = StepAggregator::default();

        for line in output.split(LINE_SEPARATOR) {
            if line.is_empty() {
                continue;
            }

            let classified = Self::classify_line(line);
            if let OutputLine::Duration { duration, .. } = &classified {
                result.duration = *duration;
            }

            let mut fields = line.split(FIELD_SEPARATOR);
            match fields.next() {
                Some(tokens::STEP) => {
                    let name = fields.next().unwrap_or_default();
                    steps.open(name, fields.next());
                }
                Some(tokens::OUTPUT) => {
                    if !steps.record_output(&classified, fields.next()) {
                        tracing::debug!(line, "output line outside of any step");
                    }
                }
                _ => {}
            }

            result.lines.push(classified);
        }

        result.steps = steps.finish();
        result
    }
}
