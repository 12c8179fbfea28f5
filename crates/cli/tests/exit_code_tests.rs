//! Integration tests for structured exit codes.
//!
//! These tests verify that appenv returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{LOCAL_SECRETS, appenv_cmd, write_secrets};
use predicates::prelude::*;
use tempfile::TempDir;

/// Test that successful commands return exit code 0.
#[test]
fn test_success_returns_exit_code_0() {
    let temp_dir = TempDir::new().unwrap();
    write_secrets(temp_dir.path(), ".secrets.json", LOCAL_SECRETS);

    appenv_cmd()
        .arg("--root")
        .arg(temp_dir.path())
        .arg("resolve")
        .assert()
        .code(0);
}

/// Test that an unknown profile returns exit code 2.
#[test]
fn test_unknown_profile_returns_exit_code_2() {
    appenv_cmd()
        .args(["--profile", "staging", "resolve"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("staging"));
}

/// Test that a missing secrets file returns exit code 3.
#[test]
fn test_missing_secrets_returns_exit_code_3() {
    let temp_dir = TempDir::new().unwrap();

    appenv_cmd()
        .arg("--root")
        .arg(temp_dir.path())
        .arg("resolve")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains(".secrets.json"));
}

/// Test that production looks for its own secrets file.
#[test]
fn test_production_missing_secrets_names_production_file() {
    let temp_dir = TempDir::new().unwrap();
    write_secrets(temp_dir.path(), ".secrets.json", LOCAL_SECRETS);

    appenv_cmd()
        .arg("--root")
        .arg(temp_dir.path())
        .args(["--profile", "production", "resolve"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(".production.secrets.json"));
}

/// Test that an unparsable secrets file returns exit code 4 without echoing content.
#[test]
fn test_invalid_secrets_returns_exit_code_4() {
    let temp_dir = TempDir::new().unwrap();
    write_secrets(
        temp_dir.path(),
        ".secrets.json",
        "{\"secretJWT\": \"do-not-print-me\",\n broken",
    );

    appenv_cmd()
        .arg("--root")
        .arg(temp_dir.path())
        .arg("resolve")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("do-not-print-me").not());
}

/// Test that an invalid output format is a general error, reported before secrets are read.
#[test]
fn test_invalid_output_format_returns_exit_code_1() {
    let temp_dir = TempDir::new().unwrap();

    appenv_cmd()
        .arg("--root")
        .arg(temp_dir.path())
        .args(["resolve", "--output", "xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}
