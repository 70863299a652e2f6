//! Find command implementation.

use anyhow::{Result, bail};
use keysheet_catalog::constants::KEY_COMBO_SEPARATOR;
use keysheet_catalog::{DisplayOptions, filter_for_display};
use std::path::Path;

use crate::formatters::{FindOutput, OutputFormat, get_formatter, output_result};
use crate::source::load_catalog;

/// Print the program, group, and keys of the first visible shortcut whose
/// action contains `text`.
pub fn run(
    config: Option<&Path>,
    text: &str,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let loaded = load_catalog(config)?;
    let view = filter_for_display(&loaded.report.catalog, &DisplayOptions::new());

    let Some(position) = view.find_shortcut(text) else {
        bail!("No shortcut action contains '{}'", text);
    };
    let program = &view.programs[position.program];
    let group = &program.groups[position.group];
    let shortcut = &group.shortcuts[position.shortcut];

    let found = FindOutput {
        program: program.name.clone(),
        group: group.name.clone(),
        action: shortcut.action.clone(),
        keys: shortcut.key_combo(KEY_COMBO_SEPARATOR),
        description: shortcut.description.clone(),
    };
    let output = get_formatter(format).format_find(&found)?;
    output_result(&output, output_file)
}
