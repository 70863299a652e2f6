//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table and JSON output formats.
//! - Define the serializable output records shared by commands.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings, see `output_result`).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - JSON output is always valid JSON, including for empty results (`[]`).
//! - Table output for empty results is a human message.

use anyhow::Result;
use keysheet_catalog::{Catalog, DroppedEntry, IdAudit, IdDiff, LibraryEntry};
use serde::Serialize;

mod common;
mod json;
mod table;

pub use common::{output_result, write_to_file};
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Result of checking one document.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    pub source: String,
    pub programs: usize,
    pub shortcuts: usize,
    pub dropped: Vec<DroppedEntry>,
}

/// Location of the first shortcut matching a search.
#[derive(Debug, Clone, Serialize)]
pub struct FindOutput {
    pub program: String,
    pub group: String,
    pub action: String,
    pub keys: Option<String>,
    pub description: String,
}

/// Result of assigning ids in one document.
#[derive(Debug, Clone, Serialize)]
pub struct AssignOutput {
    pub file: String,
    pub assigned: usize,
    pub written: bool,
}

/// Trait for formatting command output in different formats.
pub trait Formatter {
    /// Format the shortcut catalog.
    fn format_catalog(&self, catalog: &Catalog) -> Result<String>;

    /// Format document check results.
    fn format_check(&self, checks: &[CheckOutput]) -> Result<String>;

    /// Format library entries.
    fn format_library(&self, entries: &[LibraryEntry]) -> Result<String>;

    /// Format a shortcut search hit.
    fn format_find(&self, found: &FindOutput) -> Result<String>;

    /// Format an identifier audit.
    fn format_id_audit(&self, audit: &IdAudit) -> Result<String>;

    /// Format an identifier diff.
    fn format_id_diff(&self, diff: &IdDiff) -> Result<String>;

    /// Format id assignment results.
    fn format_id_assign(&self, results: &[AssignOutput]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
