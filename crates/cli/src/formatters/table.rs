//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format catalogs, check results, and id reports as tab-separated tables.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use anyhow::Result;
use keysheet_catalog::constants::KEY_COMBO_SEPARATOR;
use keysheet_catalog::{Catalog, IdAudit, IdDiff, LibraryEntry, Shortcut, Step, StepKind};

use super::common::DEFAULT_MISSING_VALUE;
use super::{AssignOutput, CheckOutput, FindOutput, Formatter};

/// Separator between rendered steps of a multi-step shortcut.
const STEP_SEPARATOR: &str = " > ";

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_catalog(&self, catalog: &Catalog) -> Result<String> {
        if catalog.is_empty() {
            return Ok("No shortcuts found.".to_string());
        }

        let mut output = String::new();
        output.push_str("Program\tGroup\tAction\tKeys\tOS\tDescription\n");
        for (program, group, shortcut) in catalog.shortcuts() {
            let os = if shortcut.os.is_empty() {
                DEFAULT_MISSING_VALUE.to_string()
            } else {
                shortcut.os.join(",")
            };
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                marked(&program.name, program.disabled),
                marked(&group.name, group.disabled),
                marked(&shortcut.action, shortcut.disabled),
                render_keys(shortcut),
                os,
                shortcut.description
            ));
        }
        Ok(output)
    }

    fn format_check(&self, checks: &[CheckOutput]) -> Result<String> {
        if checks.is_empty() {
            return Ok("No documents checked.".to_string());
        }

        let mut output = String::new();
        output.push_str("Source\tPrograms\tShortcuts\tDropped\n");
        for check in checks {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                check.source,
                check.programs,
                check.shortcuts,
                check.dropped.len()
            ));
        }

        if checks.iter().any(|check| !check.dropped.is_empty()) {
            output.push_str("\nDropped entries:\n");
            for check in checks {
                for entry in &check.dropped {
                    output.push_str(&format!("{}\t{}\n", check.source, entry));
                }
            }
        }
        Ok(output)
    }

    fn format_library(&self, entries: &[LibraryEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok("No shortcut documents found.".to_string());
        }

        let mut output = String::new();
        output.push_str("File\tName\n");
        for entry in entries {
            output.push_str(&format!("{}\t{}\n", entry.file_name, entry.display_name));
        }
        Ok(output)
    }

    fn format_find(&self, found: &FindOutput) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Program: {}\n", found.program));
        output.push_str(&format!("Group: {}\n", found.group));
        output.push_str(&format!("Action: {}\n", found.action));
        output.push_str(&format!(
            "Keys: {}\n",
            found.keys.as_deref().unwrap_or(DEFAULT_MISSING_VALUE)
        ));
        output.push_str(&format!("Description: {}\n", found.description));
        Ok(output)
    }

    fn format_id_audit(&self, audit: &IdAudit) -> Result<String> {
        if audit.is_clean() {
            return Ok("All ids are present and unique.".to_string());
        }

        let mut output = String::new();
        if !audit.duplicates.is_empty() {
            output.push_str("Duplicate ids:\n");
            for (id, locations) in &audit.duplicates {
                output.push_str(&format!("  id={}\n", id));
                for location in locations {
                    output.push_str(&format!("    - {}\n", location));
                }
            }
        }
        if !audit.missing.is_empty() {
            output.push_str("Missing ids (run `keysheet ids assign --apply`):\n");
            for location in &audit.missing {
                output.push_str(&format!("  - {}\n", location));
            }
        }
        Ok(output)
    }

    fn format_id_diff(&self, diff: &IdDiff) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("removed: {}\n", diff.removed.len()));
        for id in &diff.removed {
            output.push_str(&format!("  - {}\n", id));
        }
        output.push_str(&format!("added: {}\n", diff.added.len()));
        for id in &diff.added {
            output.push_str(&format!("  + {}\n", id));
        }
        Ok(output)
    }

    fn format_id_assign(&self, results: &[AssignOutput]) -> Result<String> {
        if results.is_empty() {
            return Ok("No documents processed.".to_string());
        }

        let mut output = String::new();
        output.push_str("File\tAssigned\tWritten\n");
        for result in results {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                result.file, result.assigned, result.written
            ));
        }
        Ok(output)
    }
}

fn marked(name: &str, disabled: bool) -> String {
    if disabled {
        format!("{} [disabled]", name)
    } else {
        name.to_string()
    }
}

/// Keys of a shortcut, or its steps when it is a multi-step shortcut.
pub(crate) fn render_keys(shortcut: &Shortcut) -> String {
    if let Some(combo) = shortcut.key_combo(KEY_COMBO_SEPARATOR) {
        return combo;
    }
    shortcut
        .steps
        .iter()
        .map(render_step)
        .collect::<Vec<_>>()
        .join(STEP_SEPARATOR)
}

fn render_step(step: &Step) -> String {
    match step.kind {
        StepKind::Keys if !step.keys.is_empty() => step.keys.join(KEY_COMBO_SEPARATOR),
        StepKind::Wait => match step.duration {
            Some(ms) => format!("wait {}ms", ms),
            None => "wait".to_string(),
        },
        kind => step
            .label()
            .map_or_else(|| kind.to_string(), |label| format!("{}: {}", kind, label)),
    }
}
