//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Resolve the output format once for all commands.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Catalog source selection (see `source` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;
    let config = cli.config.as_deref();
    let output_file = cli.output_file.as_deref();

    match cli.command {
        Commands::Show {
            show_hidden,
            hidden,
        } => commands::show::run(config, show_hidden, hidden, format, output_file),
        Commands::Check { files } => commands::check::run(&files, format, output_file),
        Commands::Library {
            dir,
            selected,
            show_hidden,
        } => commands::library::run(&dir, &selected, show_hidden, format, output_file),
        Commands::Find { text } => commands::find::run(config, &text, format, output_file),
        Commands::Export { hidden } => commands::export::run(config, hidden, output_file),
        Commands::Ids { command } => commands::ids::run(command, format, output_file),
        Commands::Payload { keys, delay } => commands::payload::run(&keys, delay, output_file),
    }
}
