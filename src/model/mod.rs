//! Data models for pdftoolbox
//!
//! This module contains process-independent data structures representing
//! pdfToolbox concepts like output lines, steps and profiles.

mod line;
mod profile;
mod result;
mod step;

pub use line::{LineKind, OutputLine};
pub use profile::{EnumerateProfilesResponse, Information, Profile, Variable};
pub use result::ParseResult;
pub use step::Step;
