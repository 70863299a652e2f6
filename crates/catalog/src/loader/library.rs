//! Per-application document library.
//!
//! Responsibilities:
//! - Discover shortcut documents in a directory.
//! - Label each document by the first program it declares.
//! - Merge a user selection of documents into one catalog.
//!
//! Invariants:
//! - Display names are unique after trimming and lower-casing; the first
//!   file (by file name) that claims a name keeps it.
//! - Entries are sorted case-insensitively by display name.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::builder::read_document;
use super::error::LoadError;
use crate::constants::{DOCUMENT_EXTENSION, SCHEMA_FILE_SUFFIX};
use crate::normalize::{NormalizeOptions, NormalizeReport};
use crate::types::Catalog;

/// A document discovered in a library directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    pub file_name: String,
    pub display_name: String,
    pub path: PathBuf,
}

impl LibraryEntry {
    /// File name without its extension; used to namespace surrogate ids.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_name)
    }
}

/// The documents available in one directory.
#[derive(Debug, Clone, Default)]
pub struct Library {
    entries: Vec<LibraryEntry>,
}

impl Library {
    /// Scan `dir` for shortcut documents.
    ///
    /// Files that cannot be read or normalized are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::ReadDir` if the directory itself cannot be listed.
    pub fn scan(dir: &Path) -> Result<Self, LoadError> {
        let read_dir_error = |source| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
            let path = entry.map_err(read_dir_error)?.path();
            if is_document(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let options = NormalizeOptions::new().with_keep_disabled(true);
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for path in paths {
            let file_name = file_name(&path);
            let report = match read_document(&path, &options) {
                Ok(report) => report,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping library document");
                    continue;
                }
            };
            let display_name = report
                .catalog
                .programs
                .first()
                .map_or_else(|| file_name.clone(), |program| program.name.clone());

            if !seen.insert(display_name.trim().to_lowercase()) {
                tracing::info!(
                    path = %path.display(),
                    display_name = %display_name,
                    "Skipping library document with duplicate name"
                );
                continue;
            }
            entries.push(LibraryEntry {
                file_name,
                display_name,
                path,
            });
        }

        entries.sort_by_cached_key(|entry| entry.display_name.to_lowercase());
        tracing::debug!(dir = %dir.display(), documents = entries.len(), "Scanned library");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by file name.
    pub fn find(&self, file_name: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|entry| entry.file_name == file_name)
    }

    /// Merge the selected documents, in library order, into one catalog.
    ///
    /// Selected names that are not in the library, and documents that no
    /// longer load, are skipped with a warning. Surrogate ids are
    /// namespaced by file stem so they stay unique across documents.
    pub fn load_selected<S: AsRef<str>>(
        &self,
        selected: &[S],
        options: &NormalizeOptions,
    ) -> NormalizeReport {
        for name in selected {
            if self.find(name.as_ref()).is_none() {
                tracing::warn!(file_name = name.as_ref(), "Selected document is not in the library");
            }
        }

        let mut catalogs = Vec::new();
        let mut dropped = Vec::new();
        for entry in &self.entries {
            if !selected.iter().any(|name| name.as_ref() == entry.file_name) {
                continue;
            }
            let options = options.clone().with_id_namespace(entry.stem());
            match read_document(&entry.path, &options) {
                Ok(report) => {
                    catalogs.push(report.catalog);
                    dropped.extend(report.dropped);
                }
                Err(e) => {
                    tracing::warn!(path = %entry.path.display(), error = %e, "Skipping selected document");
                }
            }
        }

        NormalizeReport {
            catalog: Catalog::merged(catalogs),
            dropped,
        }
    }
}

fn is_document(path: &Path) -> bool {
    let name = file_name(path).to_lowercase();
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
        && !name.ends_with(SCHEMA_FILE_SUFFIX)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
