//! End-to-end tests for the `roster-match` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster_match() -> Command {
    Command::cargo_bin("roster-match").unwrap()
}

fn write_rosters(dir: &TempDir) -> (PathBuf, PathBuf) {
    let members = dir.path().join("members.csv");
    let results = dir.path().join("results.csv");
    fs::write(&members, "William Smith, Springfield\nJohn Doe, Capital City\n").unwrap();
    fs::write(&results, "Bill Smith, Springfield\nJane Roe, Other Town\n").unwrap();
    (members, results)
}

#[test]
fn test_match_text_output() {
    let dir = TempDir::new().unwrap();
    let (members, results) = write_rosters(&dir);

    roster_match()
        .arg("match")
        .arg(&members)
        .arg(&results)
        .arg("--include-city")
        .assert()
        .success()
        .stdout(
            "# matches: 1\n\
             0.6500\tnickname\tagree\tWilliam Smith (Springfield)\tBill Smith (Springfield)\n\
             # unmatched members: 1\n\
             John Doe (Capital City)\n\
             # unmatched results: 1\n\
             Jane Roe (Other Town)\n",
        );
}

#[test]
fn test_match_without_city_uses_base_confidence() {
    let dir = TempDir::new().unwrap();
    let (members, results) = write_rosters(&dir);

    roster_match()
        .args(["match"])
        .arg(&members)
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3000\tnickname\tunknown\t"));
}

#[test]
fn test_results_from_stdin() {
    let dir = TempDir::new().unwrap();
    let (members, _) = write_rosters(&dir);

    roster_match()
        .arg("match")
        .arg(&members)
        .arg("-")
        .write_stdin("12\tBill Smith\tSpringfield\tM\t21:03\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# matches: 1\n"));
}

#[test]
fn test_both_inputs_from_stdin_is_rejected() {
    roster_match()
        .args(["match", "-", "-"])
        .write_stdin("Ann Lee\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdin"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let (members, _) = write_rosters(&dir);

    roster_match()
        .arg("match")
        .arg(&members)
        .arg(dir.path().join("nope.tsv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.tsv"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let (members, results) = write_rosters(&dir);

    let output = roster_match()
        .args(["--format", "json", "match"])
        .arg(&members)
        .arg(&results)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["matches"].as_array().unwrap().len(), 1);
    assert_eq!(value["matches"][0]["match_kind"], "nickname_variant");
    assert_eq!(value["unmatched_members"][0]["full_name"], "John Doe");
}

#[test]
fn test_tsv_output_has_header() {
    let dir = TempDir::new().unwrap();
    let (members, results) = write_rosters(&dir);

    roster_match()
        .args(["-f", "tsv", "match"])
        .arg(&members)
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("section\tconfidence\t"))
        .stdout(predicate::str::contains("unmatched_result\t"));
}

#[test]
fn test_config_file_and_flag_override() {
    let dir = TempDir::new().unwrap();
    let (members, results) = write_rosters(&dir);
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"min_confidence": 0.5}"#).unwrap();

    // Nickname at 0.3 falls below the configured threshold
    roster_match()
        .arg("match")
        .arg(&members)
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# matches: 0\n"));

    // Command-line threshold wins over the file
    roster_match()
        .arg("match")
        .arg(&members)
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .args(["--min-confidence", "0.1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# matches: 1\n"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let (members, results) = write_rosters(&dir);
    let config = dir.path().join("config.json");
    fs::write(&config, "{ not json").unwrap();

    roster_match()
        .arg("match")
        .arg(&members)
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_out_of_range_weight_is_clamped_with_warning() {
    let dir = TempDir::new().unwrap();
    let (members, results) = write_rosters(&dir);

    roster_match()
        .arg("match")
        .arg(&members)
        .arg(&results)
        .args(["--total-nickname", "3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.5000\tnickname\t"))
        .stderr(predicate::str::contains("clamped"));
}

#[test]
fn test_sample_roundtrip_through_match() {
    let dir = TempDir::new().unwrap();
    let members = dir.path().join("members.tsv");
    let results = dir.path().join("results.tsv");

    let output = roster_match().args(["sample", "members"]).output().unwrap();
    assert!(output.status.success());
    fs::write(&members, &output.stdout).unwrap();

    let output = roster_match().args(["sample", "results"]).output().unwrap();
    assert!(output.status.success());
    fs::write(&results, &output.stdout).unwrap();

    roster_match()
        .arg("match")
        .arg(&members)
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# matches: 19\n"))
        .stdout(predicate::str::contains("# unmatched members: 1\nJohn Doe (Capital City)\n"));
}

#[test]
fn test_verbose_reports_parse_stats() {
    let dir = TempDir::new().unwrap();
    let (members, results) = write_rosters(&dir);

    roster_match()
        .args(["-v", "match"])
        .arg(&members)
        .arg(&results)
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsed 2 members"));
}
