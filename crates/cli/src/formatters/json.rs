//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all command output as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.
//!
//! Invariants:
//! - Catalog output uses the document wire names (`appName`, `groupName`, ...).

use anyhow::Result;
use keysheet_catalog::{Catalog, IdAudit, IdDiff, LibraryEntry};
use serde::Serialize;

use super::{AssignOutput, CheckOutput, FindOutput, Formatter};

/// JSON formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct LibraryEntryOutput<'a> {
    file_name: &'a str,
    display_name: &'a str,
    path: String,
}

impl Formatter for JsonFormatter {
    fn format_catalog(&self, catalog: &Catalog) -> Result<String> {
        Ok(serde_json::to_string_pretty(catalog)?)
    }

    fn format_check(&self, checks: &[CheckOutput]) -> Result<String> {
        Ok(serde_json::to_string_pretty(checks)?)
    }

    fn format_library(&self, entries: &[LibraryEntry]) -> Result<String> {
        let output: Vec<LibraryEntryOutput<'_>> = entries
            .iter()
            .map(|entry| LibraryEntryOutput {
                file_name: &entry.file_name,
                display_name: &entry.display_name,
                path: entry.path.display().to_string(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_find(&self, found: &FindOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(found)?)
    }

    fn format_id_audit(&self, audit: &IdAudit) -> Result<String> {
        Ok(serde_json::to_string_pretty(audit)?)
    }

    fn format_id_diff(&self, diff: &IdDiff) -> Result<String> {
        Ok(serde_json::to_string_pretty(diff)?)
    }

    fn format_id_assign(&self, results: &[AssignOutput]) -> Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }
}
