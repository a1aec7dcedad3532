//! Integration tests for the `info` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::fixtures_dir;

fn ftv() -> Command {
    Command::cargo_bin("ftv").expect("binary builds")
}

#[test]
fn info_prints_the_flight_card() {
    ftv()
        .arg("info")
        .arg(fixtures_dir().join("sample.ast"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Rocket: AeroSentinel X1"))
        .stdout(predicate::str::contains("Motor: Cesaroni 06000"))
        .stdout(predicate::str::contains("Flight Computer: FC-1000"));
}

#[test]
fn info_prints_the_log_summary() {
    ftv()
        .arg("info")
        .arg(fixtures_dir().join("sample.ast"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Samples: 8"))
        .stdout(predicate::str::contains("Duration: 00:03"))
        .stdout(predicate::str::contains("Sensor channels: 16"));
}

#[test]
fn info_lists_flight_events_with_timestamps() {
    ftv()
        .arg("info")
        .arg(fixtures_dir().join("sample.ast"))
        .assert()
        .success()
        .stdout(predicate::str::contains("TAKEOFF DETECTION"))
        .stdout(predicate::str::contains("APOGEE"))
        .stdout(predicate::str::contains("PARACHUTE EJECTION"));
}

#[test]
fn info_fails_cleanly_on_a_missing_file() {
    ftv()
        .arg("info")
        .arg("/nonexistent/flight.ast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn info_fails_cleanly_on_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ast");
    std::fs::write(&path, "{this is not json").unwrap();

    ftv()
        .arg("info")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed flight log JSON"));
}

#[test]
fn help_lists_the_subcommands() {
    ftv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("report"));
}
