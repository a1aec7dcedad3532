//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Path to the checked-in fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp dir, returning the dir (keep it
/// alive) and the copied path.
#[allow(dead_code)]
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let dest = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &dest).expect("copy fixture");
    (dir, dest)
}
