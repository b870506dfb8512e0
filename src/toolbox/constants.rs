//! pdfToolbox-specific constants
//!
//! Centralized definitions for command-line flags, output tokens and exit codes.

/// Separator between fields of an output line (tab character)
pub const FIELD_SEPARATOR: char = '\t';

/// Separator between output lines
pub const LINE_SEPARATOR: char = '\n';

/// Command-line flags
pub mod flags {
    /// Limit processing time (seconds)
    pub const TIMEOUT: &str = "--timeout";
    /// Set a profile variable (`name:value`)
    pub const SET_VARIABLE: &str = "--setvariable";
    /// Folder receiving output files
    pub const OUTPUT_FOLDER: &str = "--outputfolder";
    /// Folder used for the tool's cache
    pub const CACHE_FOLDER: &str = "--cachefolder";
    /// Report format for enumeration commands
    pub const FORMAT_JSON: &str = "--format=json";
    /// List the profiles in a folder
    pub const ENUMERATE_PROFILES: &str = "--enumprofiles";
}

/// Leading tokens of output lines
pub mod tokens {
    pub const ERROR: &str = "Error";
    pub const ERRORS: &str = "Errors";
    pub const DURATION: &str = "Duration";
    pub const STEP: &str = "Step";
    pub const OUTPUT: &str = "Output";
}

/// Process exit codes
pub mod exit_codes {
    /// Exit codes at or above this value mean the run failed.
    /// Lower non-zero codes report hits (warnings, infos) and are not failures.
    pub const FATAL_THRESHOLD: i32 = 100;

    /// No valid serialization found or keycode expired
    pub const NOT_SERIALIZED: i32 = 100;

    /// Reported when the process ended without an exit code
    pub const ABNORMAL: i32 = -1;

    /// Human-readable description of a known exit code
    pub fn describe(code: i32) -> Option<&'static str> {
        match code {
            NOT_SERIALIZED => {
                Some("Not serialized (no valid serialization found or keycode expired)")
            }
            ABNORMAL => Some("Process terminated without an exit code"),
            _ => None,
        }
    }
}
