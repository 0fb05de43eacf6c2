mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("country").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("country"));
}

#[test]
fn lookup_prints_card_grid() {
    let server = common::serve(200, common::PAKISTAN, 1);
    let mut cmd = Command::cargo_bin("country").unwrap();
    cmd.args(["--base-url", &server.base_url, "lookup", "pk"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Islamic Republic of Pakistan"))
        .stdout(predicate::str::contains("220,892,340"))
        .stdout(predicate::str::contains("IND,AFG,IRN,CHN"));
    assert_eq!(server.finish(), vec!["/v3.1/name/pk"]);
}

#[test]
fn lookup_saves_json_record() {
    let server = common::serve(200, common::CHILE, 1);
    let dir = tempdir().unwrap();
    let out = dir.path().join("cl.json");
    let mut cmd = Command::cargo_bin("country").unwrap();
    cmd.args(["--base-url", &server.base_url, "lookup", "cl", "--format", "json", "--out"])
        .arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"startOfWeek\": \"monday\""));
    server.finish();
    assert!(out.exists());
}

#[test]
fn lookup_failure_exits_non_zero() {
    let server = common::serve(404, r#"{"status":404,"message":"Not Found"}"#, 1);
    let mut cmd = Command::cargo_bin("country").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.args(["--base-url", &server.base_url, "lookup", "atlantis"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error in fetching country info"))
        .stderr(predicate::str::contains("HTTP").not());
    server.finish();
}

#[test]
fn lookup_of_nameless_record_prints_no_cards() {
    let server = common::serve(200, r#"[{"population":5}]"#, 1);
    let mut cmd = Command::cargo_bin("country").unwrap();
    cmd.args(["--base-url", &server.base_url, "lookup", "odd"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No country information"));
    server.finish();
}

#[test]
fn interactive_redraws_per_line() {
    let server = common::serve(200, common::PAKISTAN, 1);
    let mut cmd = assert_cmd::Command::cargo_bin("country").unwrap();
    cmd.args(["--base-url", &server.base_url, "interactive"])
        .write_stdin("pk\n\n");
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    // Prompt at start, Loading..., the grid, then the prompt again after the clear.
    assert_eq!(stdout.matches("Enter Country Code:").count(), 2);
    assert!(stdout.contains("Loading..."));
    let (before_clear, after_clear) = stdout.rsplit_once("Enter Country Code:").unwrap();
    assert!(before_clear.contains("Islamic Republic of Pakistan"));
    assert!(!after_clear.contains("Islamabad"));
    assert!(!after_clear.contains('+'));
    // The empty line never reaches the network.
    assert_eq!(server.finish(), vec!["/v3.1/name/pk"]);
}

#[test]
fn interactive_passes_query_untrimmed() {
    let server = common::serve(200, common::PAKISTAN, 1);
    let mut cmd = assert_cmd::Command::cargo_bin("country").unwrap();
    cmd.args(["--base-url", &server.base_url, "interactive"])
        .write_stdin(" pk\n");
    cmd.assert().success();
    assert_eq!(server.finish(), vec!["/v3.1/name/%20pk"]);
}
