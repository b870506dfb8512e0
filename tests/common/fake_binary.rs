//! FakeBinary helper for executor tests.
//!
//! Provides a shell script standing in for the pdfToolbox executable.

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

/// An executable shell script in a temporary directory.
///
/// The script is automatically cleaned up when the FakeBinary is dropped.
pub struct FakeBinary {
    dir: TempDir,
}

impl FakeBinary {
    /// Write `body` as `/bin/sh` script named `pdfToolbox`.
    pub fn new(body: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("pdfToolbox");

        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");

        Self { dir }
    }

    /// Get the path to the script.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("pdfToolbox")
    }
}
