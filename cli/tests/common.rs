//! # GospelRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` to use them.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get GospelRS Command (`gospelrs_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled `gospelrs` binary, with
/// `GOSPELRS_CONFIG` and `RUST_LOG` cleared so the host environment does not
/// leak into the test.
///
/// ## Panics
/// Panics if the `gospelrs` binary cannot be found via `Command::cargo_bin`.
pub fn gospelrs_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gospelrs").expect("Failed to find gospelrs binary for testing");
    cmd.env_remove("GOSPELRS_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `config.toml` in a fresh temp dir. Keep the `TempDir`
/// alive for as long as the path is used.
pub fn temp_config(content: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write temp config");
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}
