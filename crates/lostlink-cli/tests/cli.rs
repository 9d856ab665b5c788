//! CLI integration tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_extract_json_output() {
    let mut cmd = Command::cargo_bin("lostlink").unwrap();
    cmd.args([
        "extract",
        "Lost my black iPhone near Central Park yesterday, reward $50",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"category\": \"electronics\""))
    .stdout(predicate::str::contains("\"post_type\": \"LOST\""))
    .stdout(predicate::str::contains("\"reward\": \"$50\""));
}

#[test]
fn test_extract_text_output() {
    let mut cmd = Command::cargo_bin("lostlink").unwrap();
    cmd.args(["extract", "--format", "text", "Found a set of keys by the door"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found / keys"));
}

#[test]
fn test_extract_rejects_short_text() {
    let mut cmd = Command::cargo_bin("lostlink").unwrap();
    cmd.args(["extract", "short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("text too short"));
}

#[test]
fn test_extract_explicit_post_type() {
    let mut cmd = Command::cargo_bin("lostlink").unwrap();
    cmd.args([
        "extract",
        "--post-type",
        "found",
        "a black umbrella left on a bench",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"post_type\": \"FOUND\""));
}

#[test]
fn test_batch_json_lines() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    writeln!(input, "Lost my wallet near the cafe yesterday").unwrap();
    writeln!(input, "Found a set of keys this morning").unwrap();

    let mut cmd = Command::cargo_bin("lostlink").unwrap();
    cmd.args(["batch", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"accessories\""))
        .stdout(predicate::str::contains("\"keys\""));
}

#[test]
fn test_batch_skip_invalid() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    writeln!(input, "too short").unwrap();
    writeln!(input, "Found a set of keys this morning").unwrap();

    let mut cmd = Command::cargo_bin("lostlink").unwrap();
    cmd.args(["batch", "--skip-invalid", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"keys\""));
}

#[test]
fn test_extract_with_objects_merges_image_side() {
    let mut objects = tempfile::NamedTempFile::new().unwrap();
    objects
        .write_all(br#"[{"label": "backpack", "confidence": 0.9}]"#)
        .unwrap();

    let mut cmd = Command::cargo_bin("lostlink").unwrap();
    cmd.args([
        "extract",
        "--objects",
        objects.path().to_str().unwrap(),
        "I seem to have dropped something unusual near here",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"category\": \"bags\""))
    .stdout(predicate::str::contains("\"detected_objects\""));
}

#[test]
fn test_identify() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    writeln!(input, "S/N: QWERTY123 call 555-123-4567").unwrap();

    let mut cmd = Command::cargo_bin("lostlink").unwrap();
    cmd.args(["identify", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"serial_number\": \"QWERTY123\""))
        .stdout(predicate::str::contains("\"phone_number\": \"555-123-4567\""));
}
