//! E2E tests for the `converter` CLI tool.
//!
//! Cover both directions (JSON → markup, markup → JSON), the generator
//! switches, stdin/stdout operation, and failure reporting.

use std::fs;

use assert_cmd::Command;
use e2e_tests::fixture;
use predicates::prelude::*;
use tempfile::tempdir;

/// Build a command for running converter.
///
/// `cargo_bin` is deprecated over an edge case with custom build
/// directories, but it is the only way to reach a binary in another
/// workspace crate.
#[expect(deprecated)]
fn converter() -> Command {
    Command::cargo_bin("converter").unwrap()
}

#[test]
fn json_to_markup_matches_the_wire_form() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("request.xml");

    converter()
        .args([
            "--input",
            fixture("request.json").to_str().unwrap(),
            "--input-format",
            "json",
            "--output-format",
            "markup",
            "--declaration",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted"));

    let produced = fs::read_to_string(&output).unwrap();
    let expected = fs::read_to_string(fixture("request.xml")).unwrap();
    assert_eq!(produced.trim(), expected.trim());
}

#[test]
fn markup_to_json_exposes_the_bank_list() {
    let assert = converter()
        .args([
            "--input",
            fixture("banks_response.xml").to_str().unwrap(),
            "--input-format",
            "markup",
            "--output-format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("\"Status\": \"OK\""));
    assert!(stdout.contains("\"Name\": \"ABN Amro\""));
    assert!(stdout.contains("\"Name\": \"Rabobank\""));
}

#[test]
fn markup_survives_a_json_round_trip() {
    let dir = tempdir().unwrap();
    let as_json = dir.path().join("response.json");
    let back = dir.path().join("response.xml");

    converter()
        .args([
            "--input",
            fixture("banks_response.xml").to_str().unwrap(),
            "--input-format",
            "markup",
            "--output-format",
            "json",
            "--output",
            as_json.to_str().unwrap(),
        ])
        .assert()
        .success();

    converter()
        .args([
            "--input",
            as_json.to_str().unwrap(),
            "--input-format",
            "json",
            "--output-format",
            "markup",
            "--output",
            back.to_str().unwrap(),
        ])
        .assert()
        .success();

    let produced = fs::read_to_string(&back).unwrap();
    let original = fs::read_to_string(fixture("banks_response.xml")).unwrap();
    assert_eq!(produced.trim(), original.trim());
}

#[test]
fn reads_stdin_and_writes_stdout() {
    converter()
        .args(["--input-format", "markup", "--output-format", "json"])
        .write_stdin("<foo><a>b</a></foo>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": \"b\""));
}

#[test]
fn no_fold_keeps_empty_elements_open() {
    converter()
        .args(["--input-format", "json", "--output-format", "markup", "--no-fold"])
        .write_stdin(r#"{"foo": ""}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("<foo></foo>"));

    converter()
        .args(["--input-format", "json", "--output-format", "markup"])
        .write_stdin(r#"{"foo": ""}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("<foo/>"));
}

#[test]
fn non_object_json_root_fails_to_generate() {
    converter()
        .args(["--input-format", "json", "--output-format", "markup"])
        .write_stdin(r#"["not", "an", "object"]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("root"));
}

#[test]
fn missing_input_file_is_reported() {
    converter()
        .args([
            "--input",
            "no-such-file.json",
            "--input-format",
            "json",
            "--output-format",
            "markup",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn malformed_markup_is_reported() {
    converter()
        .args(["--input-format", "markup", "--output-format", "json"])
        .write_stdin("<a><b>x</c></a>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("closing tag"));
}
