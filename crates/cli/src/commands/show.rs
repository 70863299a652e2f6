//! Show command implementation.

use anyhow::Result;
use keysheet_catalog::{DisplayOptions, filter_for_display};
use std::path::Path;

use crate::formatters::{OutputFormat, get_formatter, output_result};
use crate::source::load_catalog;

pub fn run(
    config: Option<&Path>,
    show_hidden: bool,
    hidden: Vec<String>,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let loaded = load_catalog(config)?;

    let options = DisplayOptions::new()
        .with_show_hidden(show_hidden)
        .with_hidden_ids(hidden);
    let view = filter_for_display(&loaded.report.catalog, &options);
    tracing::info!(
        source = %loaded.source,
        programs = view.len(),
        shortcuts = view.shortcut_count(),
        "Showing catalog"
    );

    let output = get_formatter(format).format_catalog(&view)?;
    output_result(&output, output_file)
}
