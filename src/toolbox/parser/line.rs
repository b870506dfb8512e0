//! Line classifier (single output line)

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use super::super::constants::{FIELD_SEPARATOR, tokens};
use super::Parser;
use crate::model::OutputLine;

/// Duration field layout: `MM:SS`, two digits each
static DURATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}):(\d{2})$").expect("Invalid duration regex"));

impl Parser {
    /// Classify one line of output
    ///
    /// Only the leading token decides the kind (exact, case-sensitive):
    /// - `Error` / `Errors` -> Error (`code`, `message`)
    /// - `Duration` -> Duration (`MM:SS`)
    /// - anything else -> Identity
    ///
    /// Unreadable numeric or time fields are logged and fall back to zero.
    pub fn classify_line(line: &str) -> OutputLine {
        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

        match parts[0] {
            tokens::ERROR | tokens::ERRORS => {
                let raw_code = parts.get(1).copied().unwrap_or_default();
                let code = raw_code.trim().parse::<i64>().unwrap_or_else(|e| {
                    tracing::warn!(value = raw_code, line, error = %e, "unreadable error code");
                    0
                });

                OutputLine::Error {
                    line: line.to_string(),
                    code,
                    message: parts.get(2).copied().unwrap_or_default().to_string(),
                }
            }
            tokens::DURATION => {
                let raw_time = parts.get(1).copied().unwrap_or_default();
                let duration = Self::parse_duration(raw_time).unwrap_or_else(|| {
                    tracing::warn!(value = raw_time, line, "unreadable duration");
                    Duration::ZERO
                });

                OutputLine::Duration {
                    line: line.to_string(),
                    duration,
                }
            }
            _ => OutputLine::Identity {
                line: line.to_string(),
                parts: parts.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    /// Parse an `MM:SS` field (minutes and seconds each 00-59)
    pub(super) fn parse_duration(field: &str) -> Option<Duration> {
        let caps = DURATION_REGEX.captures(field.trim())?;
        let minutes: u64 = caps[1].parse().ok()?;
        let seconds: u64 = caps[2].parse().ok()?;

        if minutes >= 60 || seconds >= 60 {
            return None;
        }

        Some(Duration::from_secs(minutes * 60 + seconds))
    }
}
