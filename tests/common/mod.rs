//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol * (1.0 + expected.abs()),
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Writes `contents` to a per-process file in the temp directory.
pub fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("simpson_quad_{}_{}", std::process::id(), name));
    fs::write(&path, contents).expect("failed to write temp file");
    path
}
