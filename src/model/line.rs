//! Classified output line model

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Kind of a classified output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Informational/progress line kept verbatim
    Identity,
    /// Embedded tool error (`Error` / `Errors`)
    Error,
    /// Total elapsed time reported by the tool (`Duration`)
    Duration,
}

/// One non-empty line of pdfToolbox output after classification
///
/// Serializes with `{"kind": "identity" | "error" | "duration", ...fields}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputLine {
    /// Any line whose leading token is not in the recognized vocabulary
    Identity {
        /// The full line as printed
        line: String,
        /// TAB-separated fields of the line
        parts: Vec<String>,
    },

    /// `Error\t<code>\t<message>` or `Errors\t<code>\t<message>`
    Error {
        line: String,
        /// Error code reported by the tool (0 when the field was unreadable)
        code: i64,
        message: String,
    },

    /// `Duration\t<MM:SS>`
    Duration {
        line: String,
        /// Parsed elapsed time (zero when the field was unreadable)
        duration: Duration,
    },
}

impl OutputLine {
    /// Get the kind tag of this line
    pub fn kind(&self) -> LineKind {
        match self {
            OutputLine::Identity { .. } => LineKind::Identity,
            OutputLine::Error { .. } => LineKind::Error,
            OutputLine::Duration { .. } => LineKind::Duration,
        }
    }

    /// Get the raw line text
    pub fn as_str(&self) -> &str {
        match self {
            OutputLine::Identity { line, .. }
            | OutputLine::Error { line, .. }
            | OutputLine::Duration { line, .. } => line,
        }
    }

    /// Leading token of the line (`Progress`, `Step`, `Error`, ...)
    pub fn token(&self) -> &str {
        self.as_str()
            .split(crate::toolbox::constants::FIELD_SEPARATOR)
            .next()
            .unwrap_or_default()
    }

    /// Get `(code, message)` if this is an error line
    pub fn as_error(&self) -> Option<(i64, &str)> {
        match self {
            OutputLine::Error { code, message, .. } => Some((*code, message.as_str())),
            OutputLine::Identity { .. } | OutputLine::Duration { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(line: &str) -> OutputLine {
        OutputLine::Identity {
            line: line.to_string(),
            parts: line.split('\t').map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(identity("Pages\t1").kind(), LineKind::Identity);
        let error = OutputLine::Error {
            line: "Errors\t1\tboom".to_string(),
            code: 1,
            message: "boom".to_string(),
        };
        assert_eq!(error.kind(), LineKind::Error);
        let duration = OutputLine::Duration {
            line: "Duration\t00:03".to_string(),
            duration: Duration::from_secs(3),
        };
        assert_eq!(duration.kind(), LineKind::Duration);
    }

    #[test]
    fn test_token_and_raw_text() {
        let line = identity("Progress\t39\t%");
        assert_eq!(line.token(), "Progress");
        assert_eq!(line.as_str(), "Progress\t39\t%");
    }

    #[test]
    fn test_as_error() {
        let error = OutputLine::Error {
            line: "Error\t1002\tCould not open file".to_string(),
            code: 1002,
            message: "Could not open file".to_string(),
        };
        assert_eq!(error.as_error(), Some((1002, "Could not open file")));
        assert_eq!(identity("Hit\tError\tTrim box").as_error(), None);
    }

    #[test]
    fn test_serialized_kind_tag() {
        let json = serde_json::to_value(identity("my line")).unwrap();
        assert_eq!(json["kind"], "identity");
        assert_eq!(json["line"], "my line");
        assert_eq!(json["parts"], serde_json::json!(["my line"]));
    }

    #[test]
    fn test_serde_keeps_every_variant() {
        let lines = vec![
            identity("ProcessID\t13913"),
            OutputLine::Error {
                line: "Errors\t1\tTrim box is not equal to 70 x 70 mm".to_string(),
                code: 1,
                message: "Trim box is not equal to 70 x 70 mm".to_string(),
            },
            OutputLine::Duration {
                line: "Duration\t01:07".to_string(),
                duration: Duration::from_secs(67),
            },
        ];

        let json = serde_json::to_string(&lines).unwrap();
        let decoded: Vec<OutputLine> = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, lines);
        let kinds: Vec<LineKind> = decoded.iter().map(OutputLine::kind).collect();
        assert_eq!(
            kinds,
            vec![LineKind::Identity, LineKind::Error, LineKind::Duration]
        );
    }
}
