//! Exit code contract tests for scripting.

mod common;

use common::{keysheet_cmd, write_document};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_success_exit_code() {
    keysheet_cmd().arg("show").assert().code(0);
}

#[test]
fn test_invalid_output_format_is_general_error() {
    keysheet_cmd()
        .args(["show", "-o", "xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format: xml"));
}

#[test]
fn test_version_flag() {
    keysheet_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("keysheet "));
}

#[test]
fn test_unreadable_output_file_location_is_general_error() {
    let dir = TempDir::new().unwrap();
    let blocker = write_document(dir.path(), "blocker", "");
    let target = blocker.join("out.txt");

    keysheet_cmd()
        .args(["show", "--output-file", target.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write output"));
}

#[test]
fn test_verbose_logs_source_to_stderr() {
    keysheet_cmd()
        .args(["--verbose", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Catalog ready"));
}
