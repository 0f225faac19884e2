//! Integration tests for the field command

use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

mod common;
use common::sigtag_cmd;

#[test]
fn test_minimal_signature_field() {
    sigtag_cmd()
        .args(["field", "--type", "signature", "--role", "Signer 1"])
        .args(["--width", "100", "--height", "30"])
        .assert()
        .success()
        .stdout("{{t:s;o:\"Signer 1\";w:100;h:30;}}\n");
}

#[test]
fn test_text_field_with_label() {
    sigtag_cmd()
        .args(["field", "--type", "text", "--role", "Signer 1"])
        .args(["--width", "150", "--height", "20", "--label", "Name"])
        .assert()
        .success()
        .stdout("{{t:t;o:\"Signer 1\";l:\"Name\";w:150;h:20;}}\n");
}

#[test]
fn test_signature_field_ignores_label() {
    sigtag_cmd()
        .args(["field", "--type", "signature", "--role", "Signer 1"])
        .args(["--width", "150", "--height", "20", "--label", "Name"])
        .assert()
        .success()
        .stdout("{{t:s;o:\"Signer 1\";w:150;h:20;}}\n");
}

#[test]
fn test_dropdown_field() {
    sigtag_cmd()
        .args(["field", "--type", "dropdown", "--role", "Signer 1"])
        .args(["--width", "100", "--height", "20"])
        .args(["--option", "Yes", "--option", "No"])
        .assert()
        .success()
        .stdout("{{t:d;o:\"Signer 1\";dd:\"Yes,No\";w:100;h:20;}}\n");
}

#[test]
fn test_required_field() {
    sigtag_cmd()
        .args(["field", "--type", "checkbox", "--role", "Signer 2"])
        .args(["--width", "20", "--height", "20", "--required", "true"])
        .assert()
        .success()
        .stdout("{{t:c;r:y;o:\"Signer 2\";w:20;h:20;}}\n");
}

#[test]
fn test_missing_role() {
    sigtag_cmd()
        .args(["field", "--type", "signature"])
        .args(["--width", "100", "--height", "30"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("role"));
}

#[test]
fn test_missing_height() {
    sigtag_cmd()
        .args(["field", "--type", "signature", "--role", "Signer 1"])
        .args(["--width", "100"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("height"));
}

#[test]
fn test_invalid_type() {
    sigtag_cmd()
        .args(["field", "--type", "radio", "--role", "Signer 1"])
        .args(["--width", "100", "--height", "30"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid tag type"));
}

#[test]
fn test_invalid_dimension() {
    sigtag_cmd()
        .args(["field", "--type", "text", "--role", "Signer 1"])
        .args(["--width", "wide", "--height", "20"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid dimension"));
}

#[test]
fn test_fractional_dimension_truncates() {
    sigtag_cmd()
        .args(["field", "--type", "text", "--role", "Signer 1"])
        .args(["--width", "150.9", "--height", "20"])
        .assert()
        .success()
        .stdout("{{t:t;o:\"Signer 1\";w:150;h:20;}}\n");
}

#[test]
fn test_nonexistent_file() {
    sigtag_cmd()
        .args(["field", "--type", "signature", "--role", "Signer 1"])
        .args(["--width", "100", "--height", "30"])
        .args(["--file", "/nonexistent/path/attachment.pdf"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid file"));
}

#[test]
fn test_existing_file_embedded() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "attachment").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    sigtag_cmd()
        .args(["field", "--type", "signature", "--role", "Signer 1"])
        .args(["--width", "100", "--height", "30", "--file", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("f:\"{}\";", path)));
}

#[test]
fn test_validator_by_name() {
    sigtag_cmd()
        .args(["field", "--type", "text", "--role", "Signer 1"])
        .args(["--width", "150", "--height", "20", "--validator", "EMAIL"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "v:\"7cd795fd64ce63b670b52b2e83457d59ac796a39\";",
        ));
}

#[test]
fn test_validator_by_reference() {
    sigtag_cmd()
        .args(["field", "--type", "text", "--role", "Signer 1"])
        .args(["--width", "150", "--height", "20"])
        .args(["--validator", "1109cfbbb06311a06a4c7f8d04f1f0d5c44103cb"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "v:\"1109cfbbb06311a06a4c7f8d04f1f0d5c44103cb\";",
        ));
}

#[test]
fn test_unknown_validator() {
    sigtag_cmd()
        .args(["field", "--type", "text", "--role", "Signer 1"])
        .args(["--width", "150", "--height", "20", "--validator", "NOPE"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid validator"));
}

#[test]
fn test_validator_on_dropdown_suppresses_options() {
    sigtag_cmd()
        .args(["field", "--type", "dropdown", "--role", "Signer 1"])
        .args(["--width", "100", "--height", "20"])
        .args(["--option", "Yes", "--option", "No", "--validator", "NUMERIC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dd:").not())
        .stdout(predicate::str::contains(
            "v:\"1109cfbbb06311a06a4c7f8d04f1f0d5c44103cb\";",
        ));
}

#[test]
fn test_validators_listing() {
    let output = sigtag_cmd().arg("validators").output().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 17);
    assert!(lines[0].starts_with("DD_MM_YYYY"));
    assert!(stdout.contains("7cd795fd64ce63b670b52b2e83457d59ac796a39"));
}
