//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load documents (see `source` module).

use clap::{Parser, Subcommand};
use keysheet_catalog::constants::LIBRARY_DIR_ENV;
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "keysheet")]
#[command(about = "keysheet - Browse and maintain shortcut cheat-sheet documents", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  keysheet show\n  keysheet --config shortcuts.json show --show-hidden\n  keysheet check config/*.json\n  keysheet library config/shortcutJsons --select vscode.json\n  keysheet find 'Quick open'\n  keysheet ids check config/shortcutJsons\n  keysheet payload Ctrl Shift P\n"
)]
pub struct Cli {
    /// Shortcut document to load before `KEYSHEET_CONFIG_PATH` and the bundled document
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the shortcut catalog
    Show {
        /// Include disabled and hidden entries
        #[arg(long)]
        show_hidden: bool,

        /// Hide the shortcut with this id (repeatable)
        #[arg(long = "hide", value_name = "ID")]
        hidden: Vec<String>,
    },

    /// Validate shortcut documents and list excluded entries
    Check {
        /// Documents to check
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// List per-application documents in a library directory
    Library {
        /// Library directory
        #[arg(env = LIBRARY_DIR_ENV, value_name = "DIR")]
        dir: PathBuf,

        /// Merge and show these documents (file names, repeatable)
        #[arg(long = "select", value_name = "FILE")]
        selected: Vec<String>,

        /// Include disabled entries when showing a selection
        #[arg(long)]
        show_hidden: bool,
    },

    /// Find the first shortcut whose action contains TEXT
    Find {
        /// Text to search for in shortcut actions
        text: String,
    },

    /// Export the catalog, writing hidden shortcuts as disabled
    Export {
        /// Mark the shortcut with this id as disabled (repeatable)
        #[arg(long = "hide", value_name = "ID")]
        hidden: Vec<String>,
    },

    /// Audit and maintain stable identifiers
    Ids {
        #[command(subcommand)]
        command: commands::ids::IdsCommand,
    },

    /// Print the key relay payload for a key combination
    Payload {
        /// Keys of the combination, in press order
        #[arg(required = true, value_name = "KEY")]
        keys: Vec<String>,

        /// Delay between key events in milliseconds
        #[arg(long, value_name = "MS")]
        delay: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["keysheet", "show", "--output", "json", "--hide", "a", "--hide", "b"])
            .unwrap();
        assert_eq!(cli.output, "json");
        match cli.command {
            Commands::Show { show_hidden, hidden } => {
                assert!(!show_hidden);
                assert_eq!(hidden, ["a", "b"]);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_payload_requires_keys() {
        assert!(Cli::try_parse_from(["keysheet", "payload"]).is_err());
    }
}
