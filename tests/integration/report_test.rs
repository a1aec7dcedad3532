//! Integration tests for the `report` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::fixtures_dir;

fn ftv() -> Command {
    Command::cargo_bin("ftv").expect("binary builds")
}

#[test]
fn report_renders_two_charts_per_page() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report");

    ftv()
        .arg("report")
        .arg(fixtures_dir().join("sample.ast"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("16 chart(s)"))
        .stdout(predicate::str::contains("8 page(s)"));

    // 16 channels at two charts per page
    for page in 1..=8 {
        let path = out.join(format!("page-{:02}.png", page));
        assert!(path.exists(), "missing {:?}", path);
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
    assert!(!out.join("page-09.png").exists());
}

#[test]
fn report_fails_cleanly_on_a_missing_file() {
    ftv()
        .arg("report")
        .arg("/nonexistent/flight.ast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
