//! Library command implementation.

use anyhow::Result;
use keysheet_catalog::{DisplayOptions, Library, NormalizeOptions, filter_for_display};
use std::path::Path;

use crate::formatters::{OutputFormat, get_formatter, output_result};

/// List the documents in `dir`, or merge and show the selected ones.
pub fn run(
    dir: &Path,
    selected: &[String],
    show_hidden: bool,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let library = Library::scan(dir)?;
    let formatter = get_formatter(format);

    let output = if selected.is_empty() {
        formatter.format_library(library.entries())?
    } else {
        let report =
            library.load_selected(selected, &NormalizeOptions::new().with_keep_disabled(true));
        let view = filter_for_display(
            &report.catalog,
            &DisplayOptions::new().with_show_hidden(show_hidden),
        );
        formatter.format_catalog(&view)?
    };
    output_result(&output, output_file)
}
