//! Typed command-line options for pdfToolbox

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants::flags;

/// A single command-line option, rendered as `arg` or `arg=value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arg {
    pub arg: String,
    pub value: Option<String>,
}

impl Arg {
    /// Option without a value (e.g. `--nosummary`)
    pub fn flag(arg: impl Into<String>) -> Self {
        Self {
            arg: arg.into(),
            value: None,
        }
    }

    /// Option with a value
    pub fn with_value(arg: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            arg: arg.into(),
            value: Some(value.into()),
        }
    }

    /// `--timeout=<seconds>`, rounded up to whole seconds
    pub fn timeout(duration: Duration) -> Self {
        let secs = duration.as_secs_f64().ceil() as u64;
        Self::with_value(flags::TIMEOUT, secs.to_string())
    }

    /// `--setvariable=<name>:<value>`
    pub fn set_variable(name: &str, value: impl fmt::Display) -> Self {
        Self::with_value(flags::SET_VARIABLE, format!("{}:{}", name, value))
    }

    /// `--outputfolder=<dir>`
    pub fn output_folder(dir: impl AsRef<Path>) -> Self {
        Self::with_value(
            flags::OUTPUT_FOLDER,
            dir.as_ref().to_string_lossy().into_owned(),
        )
    }

    /// `--cachefolder=<dir>`
    pub fn cache_folder(dir: impl AsRef<Path>) -> Self {
        Self::with_value(
            flags::CACHE_FOLDER,
            dir.as_ref().to_string_lossy().into_owned(),
        )
    }

    /// Render as it appears on the command line
    pub fn to_arg_string(&self) -> String {
        match &self.value {
            Some(value) => format!("{}={}", self.arg, value),
            None => self.arg.clone(),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_arg_string())
    }
}
