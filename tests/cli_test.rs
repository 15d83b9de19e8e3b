use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

mod common;

fn write_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("payload.json");
    fs::write(&path, common::fixture_payload().to_string()).unwrap();
    path
}

#[test]
fn test_report_renders_rank_and_totals() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_fixture(&dir);

    Command::cargo_bin("spire")
        .unwrap()
        .args(["report", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("NEOPHYTE"))
        .stdout(predicate::str::contains("133"))
        .stdout(predicate::str::contains("octocat"));
}

#[test]
fn test_blueprint_compact_is_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_fixture(&dir);

    let output = Command::cargo_bin("spire")
        .unwrap()
        .args(["blueprint", "--compact", payload.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["stats"]["totalContributions"], 133);
    assert_eq!(value["floors"].as_array().unwrap().len(), 8);
}

#[test]
fn test_floors_table_lists_every_week() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_fixture(&dir);

    Command::cargo_bin("spire")
        .unwrap()
        .args(["floors", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tower Floors"))
        .stdout(predicate::str::contains("WIREFRAME"));
}

#[test]
fn test_stdin_payload() {
    Command::cargo_bin("spire")
        .unwrap()
        .args(["blueprint", "--compact", "-"])
        .write_stdin(common::fixture_payload().to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalContributions\":133"));
}

#[test]
fn test_non_provider_json_degrades_to_empty_blueprint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.json");
    fs::write(&path, "not json at all").unwrap();

    Command::cargo_bin("spire")
        .unwrap()
        .args(["blueprint", "--compact", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ranking\":\"GHOST\""));
}

#[test]
fn test_missing_file_is_a_hard_error() {
    Command::cargo_bin("spire")
        .unwrap()
        .args(["report", "/definitely/not/here.json"])
        .assert()
        .failure();
}

#[test]
fn test_french_locale_month_names() {
    let dir = tempfile::tempdir().unwrap();
    let payload = write_fixture(&dir);

    Command::cargo_bin("spire")
        .unwrap()
        .args(["report", "--locale", "fr", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("février"));
}
