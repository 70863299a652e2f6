//! Check command implementation.
//!
//! Normalizes each document on its own (no fallback to other sources) and
//! lists the entries that were excluded. Disabled entries are kept, so only
//! malformed entries and the parents they empty are reported.

use anyhow::Result;
use keysheet_catalog::{NormalizeOptions, read_document};
use std::path::{Path, PathBuf};

use crate::formatters::{CheckOutput, OutputFormat, get_formatter, output_result};

pub fn run(files: &[PathBuf], format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let options = NormalizeOptions::new().with_keep_disabled(true);

    let mut checks = Vec::with_capacity(files.len());
    for path in files {
        let report = read_document(path, &options)?;
        checks.push(CheckOutput {
            source: path.display().to_string(),
            programs: report.catalog.len(),
            shortcuts: report.catalog.shortcut_count(),
            dropped: report.dropped,
        });
    }

    let output = get_formatter(format).format_check(&checks)?;
    output_result(&output, output_file)
}
