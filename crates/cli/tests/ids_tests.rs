//! Integration tests for `keysheet ids`.

mod common;

use common::{keysheet_cmd, write_document};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const COMPLETE: &str = r#"[{"id": "p1", "appName": "A", "groups": [{"id": "g1", "groupName": "G", "shortcuts": [
    {"id": "s1", "action": "Copy", "description": "", "keys": ["Ctrl", "C"]}
]}]}]"#;

const MISSING: &str = r#"[{"id": "p2", "appName": "B", "groups": [{"groupName": "G", "shortcuts": [
    {"action": "Paste", "description": "", "keys": ["Ctrl", "V"]}
]}]}]"#;

#[test]
fn test_ids_check_clean() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "a.json", COMPLETE);

    keysheet_cmd()
        .args(["ids", "check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All ids are present and unique."));
}

#[test]
fn test_ids_check_duplicates_across_documents() {
    let dir = TempDir::new().unwrap();
    write_document(dir.path(), "a.json", COMPLETE);
    write_document(dir.path(), "b.json", COMPLETE);

    keysheet_cmd()
        .args(["ids", "check", dir.path().to_str().unwrap()])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("  id=p1\n"))
        .stderr(predicate::str::contains("Identifier audit failed: 3 duplicate id(s), 0 missing id(s)"));
}

#[test]
fn test_ids_check_reports_missing() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "b.json", MISSING);

    keysheet_cmd()
        .args(["ids", "check", path.to_str().unwrap()])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("group:G"))
        .stdout(predicate::str::contains("shortcut:Paste"));
}

#[test]
fn test_ids_check_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "bad.json", "[");

    keysheet_cmd()
        .args(["ids", "check", path.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_ids_diff() {
    let dir = TempDir::new().unwrap();
    let old = write_document(dir.path(), "old.json", COMPLETE);
    let new = write_document(
        dir.path(),
        "new.json",
        r#"[{"id": "p1", "appName": "A", "groups": [{"id": "g2", "groupName": "G", "shortcuts": [
            {"id": "s1", "action": "Copy", "description": "", "keys": ["Ctrl", "C"]}
        ]}]}]"#,
    );

    keysheet_cmd()
        .args(["ids", "diff", old.to_str().unwrap(), new.to_str().unwrap()])
        .assert()
        .success()
        .stdout("removed: 1\n  - g1\nadded: 1\n  + g2\n");
}

#[test]
fn test_ids_assign_dry_run_leaves_file() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "b.json", MISSING);

    keysheet_cmd()
        .args(["ids", "assign", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("b.json\t2\tfalse"));

    assert_eq!(fs::read_to_string(&path).unwrap(), MISSING);
}

#[test]
fn test_ids_assign_apply_then_check_passes() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "b.json", MISSING);

    keysheet_cmd()
        .args(["ids", "assign", "--apply", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("b.json\t2\ttrue"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value[0]["id"], "p2");
    assert!(value[0]["groups"][0]["id"].is_string());

    keysheet_cmd()
        .args(["ids", "check", path.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_ids_assign_apply_keeps_key_order() {
    let dir = TempDir::new().unwrap();
    let path = write_document(
        dir.path(),
        "ordered.json",
        r#"[{"appName": "Zed", "order": 1, "groups": [
            {"groupName": "G", "shortcuts": [
                {"action": "Save", "keys": ["Ctrl", "S"], "description": ""}
            ]}
        ]}]"#,
    );

    keysheet_cmd()
        .args(["ids", "assign", "--apply", path.to_str().unwrap()])
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    let position = |needle: &str| text.find(needle).unwrap();
    assert!(position("\"appName\"") < position("\"order\""));
    assert!(position("\"order\"") < position("\"groups\""));
    assert!(position("\"action\"") < position("\"keys\""));
    assert!(position("\"keys\"") < position("\"description\""));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let program_keys: Vec<&String> = value[0].as_object().unwrap().keys().collect();
    assert_eq!(program_keys, ["appName", "order", "groups", "id"]);
    assert!(text.ends_with("}\n]\n"));
}
