//! pdftoolbox - client for the pdfToolbox command-line processor
//!
//! Runs pdfToolbox profiles as external processes and parses the tool's
//! TAB-separated progress log into typed results.
//!
//! This library provides:
//! - [`model`]: Output lines, steps, parse results and profile listings
//! - [`toolbox`]: Command-line assembly, process execution and output parsing
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use pdftoolbox::toolbox::{Arg, Client, ClientOpts};
//!
//! # fn main() -> Result<(), pdftoolbox::toolbox::ToolboxError> {
//! let client = Client::new(
//!     "/opt/callas/pdfToolbox",
//!     ClientOpts::default().with_profile_folder("/opt/impose/profiles"),
//! )?;
//!
//! let result = client.run_profile(
//!     "CLI_Example.kfpx",
//!     &["input.pdf"],
//!     &[
//!         Arg::set_variable("trimWidth", 55),
//!         Arg::timeout(Duration::from_secs(60)),
//!     ],
//! )?;
//!
//! for path in result.output_file_paths() {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod model;
pub mod toolbox;
