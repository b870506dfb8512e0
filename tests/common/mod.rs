//! Common test utilities for integration tests.
//!
//! This module provides a replaying executor, a scripted stand-in for the
//! pdfToolbox binary and the captured output fixtures.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

#[cfg(unix)]
pub mod fake_binary;
pub mod fake_executor;

#[cfg(unix)]
pub use fake_binary::FakeBinary;
pub use fake_executor::FakeExecutor;

/// Run with a `Hit\tError` line and an `Errors` summary
pub const HIT_ERRORS: &str = include_str!("../fixtures/hit_errors.txt");

/// Run without any errors or steps
pub const CLEAN_RUN: &str = include_str!("../fixtures/clean_run.txt");

/// Profile that could not be opened (`Error\t1002\t...`)
pub const OPEN_FAILURE: &str = include_str!("../fixtures/open_failure.txt");

/// Multi-step imposition run with 16 steps and 4 output files
pub const FULL_RUN: &str = include_str!("../fixtures/full_run.txt");
