//! Export command implementation.

use anyhow::{Context, Result};
use keysheet_catalog::{EntryId, export_json};
use std::collections::HashSet;
use std::path::Path;

use crate::formatters::output_result;
use crate::source::load_catalog;

/// Export the loaded catalog with the `hidden` shortcuts marked disabled.
///
/// The output is always the document format, regardless of `--output`.
pub fn run(config: Option<&Path>, hidden: Vec<String>, output_file: Option<&Path>) -> Result<()> {
    let loaded = load_catalog(config)?;
    let hidden: HashSet<EntryId> = hidden.into_iter().map(EntryId::from).collect();

    let output = export_json(&loaded.report.catalog, &hidden).context("Failed to export catalog")?;
    output_result(&output, output_file)
}
