//! keysheet - Command-line front end for shortcut cheat-sheet documents.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load and normalize shortcut documents via the shared catalog library.
//! - Format and display results in table or JSON form.
//!
//! Does NOT handle:
//! - Normalization rules (see `crates/catalog`).
//! - Bluetooth transport for the key relay (only the payload is produced).
//!
//! Invariants:
//! - Logs go to stderr; command output goes to stdout or `--output-file`.
//! - `--verbose` raises the default log level only when `RUST_LOG` is unset.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod source;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
