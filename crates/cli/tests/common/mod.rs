//! Shared test utilities for keysheet integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write shortcut documents into temporary directories.
//!
//! Invariants / Assumptions:
//! - Commands never see the host's `KEYSHEET_*` or `RUST_LOG` variables.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `keysheet` command for integration testing.
pub fn keysheet_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("keysheet");

    // Clear potential host leakage
    cmd.env_remove("KEYSHEET_CONFIG_PATH")
        .env_remove("KEYSHEET_LIBRARY_DIR")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_document(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test document");
    path
}

/// A two-program document where ordering hints and a disabled entry matter.
pub const EDITOR_DOCUMENT: &str = r#"[
  {"id": "p-term", "appName": "Terminal", "order": 2, "groups": [
    {"id": "g-tabs", "groupName": "Tabs", "shortcuts": [
      {"id": "s-new-tab", "action": "New tab", "description": "Open a tab", "keys": ["Ctrl", "T"]}
    ]}
  ]},
  {"id": "p-editor", "appName": "Editor", "order": 1, "groups": [
    {"id": "g-edit", "groupName": "Edit", "shortcuts": [
      {"id": "s-paste", "action": "Paste", "description": "Paste clipboard", "keys": ["Ctrl", "V"], "order": 2},
      {"id": "s-copy", "action": "Copy", "description": "Copy selection", "keys": ["Ctrl", "C"], "order": 1},
      {"id": "s-cut", "action": "Cut", "description": "Cut selection", "keys": ["Ctrl", "X"], "disEnable": true}
    ]}
  ]}
]"#;
