//! Identifier audit command implementation.
//!
//! Responsibilities:
//! - Audit documents and directories for duplicate and missing ids.
//! - Compare the ids of two document revisions.
//! - Assign random ids to entries without one, optionally in place.
//!
//! Does NOT handle:
//! - Normalization; documents are inspected as raw JSON so entries that
//!   would be dropped are audited too.

use anyhow::{Context, Result};
use clap::Subcommand;
use keysheet_catalog::constants::{DOCUMENT_EXTENSION, SCHEMA_FILE_SUFFIX};
use keysheet_catalog::ids::random_id;
use keysheet_catalog::{assign_missing_ids, audit_ids, diff_ids};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuditFailure;
use crate::formatters::{AssignOutput, OutputFormat, get_formatter, output_result, write_to_file};

#[derive(Subcommand)]
pub enum IdsCommand {
    /// Fail when any id is duplicated or missing
    Check {
        /// Documents or directories of documents
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },

    /// List ids added and removed between two revisions
    Diff {
        /// Old (base) document
        old: PathBuf,

        /// New (head) document
        new: PathBuf,
    },

    /// Give every entry without an id a random UUID
    Assign {
        /// Documents or directories of documents
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Write the changes back to the documents (default: dry run)
        #[arg(long)]
        apply: bool,
    },
}

pub fn run(command: IdsCommand, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let formatter = get_formatter(format);

    match command {
        IdsCommand::Check { paths } => {
            let documents = read_documents(&paths)?;
            let audit = audit_ids(
                documents
                    .iter()
                    .map(|(source, doc)| (source.as_str(), doc)),
            );
            output_result(&formatter.format_id_audit(&audit)?, output_file)?;

            if !audit.is_clean() {
                return Err(AuditFailure {
                    duplicates: audit.duplicates.len(),
                    missing: audit.missing.len(),
                }
                .into());
            }
        }
        IdsCommand::Diff { old, new } => {
            let diff = diff_ids(&read_raw(&old)?, &read_raw(&new)?);
            output_result(&formatter.format_id_diff(&diff)?, output_file)?;
        }
        IdsCommand::Assign { paths, apply } => {
            let mut results = Vec::new();
            for path in expand_paths(&paths)? {
                let mut doc = read_raw(&path)?;
                let assigned = assign_missing_ids(&mut doc, &mut random_id);
                let written = apply && assigned > 0;
                if written {
                    let text = serde_json::to_string_pretty(&doc)?;
                    write_to_file(&format!("{}\n", text), &path)
                        .with_context(|| format!("Failed to update {}", path.display()))?;
                    tracing::info!(path = %path.display(), assigned, "Assigned ids");
                }
                results.push(AssignOutput {
                    file: path.display().to_string(),
                    assigned,
                    written,
                });
            }
            output_result(&formatter.format_id_assign(&results)?, output_file)?;
        }
    }

    Ok(())
}

fn read_documents(paths: &[PathBuf]) -> Result<Vec<(String, Value)>> {
    expand_paths(paths)?
        .into_iter()
        .map(|path| Ok((path.display().to_string(), read_raw(&path)?)))
        .collect()
}

fn read_raw(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Replace each directory in `paths` with the documents below it, sorted.
fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut expanded = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            collect_documents(path, &mut found)?;
            found.sort();
            expanded.extend(found);
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}

fn collect_documents(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();
        if path.is_dir() {
            collect_documents(&path, found)?;
        } else if is_document(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_document(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    name.ends_with(&format!(".{}", DOCUMENT_EXTENSION)) && !name.ends_with(SCHEMA_FILE_SUFFIX)
}
