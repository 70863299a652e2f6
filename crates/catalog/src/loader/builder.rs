//! Catalog loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `CatalogLoader` over an ordered list of candidate sources.
//! - Fall back through candidates until one yields a normalized catalog.
//!
//! Does NOT handle:
//! - Environment variable parsing details (delegated to env.rs).
//! - Library directory discovery (see library.rs).
//!
//! Invariants / Assumptions:
//! - Candidates are tried in the order they were added; the bundled document
//!   is always tried last.
//! - `from_env()` must be called explicitly to consult `KEYSHEET_CONFIG_PATH`.

use std::path::{Path, PathBuf};

use super::env::env_var_or_none;
use super::error::LoadError;
use crate::constants::CONFIG_PATH_ENV;
use crate::normalize::{NormalizeOptions, NormalizeReport, normalize_slice};

/// Where a loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Bundled,
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Bundled => write!(f, "<bundled>"),
        }
    }
}

/// A normalized catalog together with its source.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub report: NormalizeReport,
    pub source: CatalogSource,
}

/// Loader that tries candidate documents in order.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    paths: Vec<PathBuf>,
    bundled: Option<String>,
    options: NormalizeOptions,
}

impl CatalogLoader {
    /// Create a loader with no candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate document path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Add several candidate document paths.
    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Append `KEYSHEET_CONFIG_PATH` as a candidate when it is set.
    pub fn from_env(mut self) -> Self {
        if let Some(path) = env_var_or_none(CONFIG_PATH_ENV) {
            self.paths.push(PathBuf::from(path));
        }
        self
    }

    /// Set the embedded document used when no candidate path is usable.
    pub fn with_bundled(mut self, text: impl Into<String>) -> Self {
        self.bundled = Some(text.into());
        self
    }

    /// Set the normalization options applied to every candidate.
    pub fn with_options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Candidate paths in the order they will be tried.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Load the first usable candidate.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NoUsableSource` listing every attempt when no
    /// candidate (including the bundled document) could be normalized.
    pub fn load(self) -> Result<LoadedCatalog, LoadError> {
        let mut attempts = Vec::new();

        for path in &self.paths {
            match read_document(path, &self.options) {
                Ok(report) => {
                    tracing::info!(path = %path.display(), "Loaded shortcut document");
                    return Ok(LoadedCatalog {
                        report,
                        source: CatalogSource::File(path.clone()),
                    });
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping shortcut document");
                    attempts.push(format!("{}: {}", path.display(), describe_failure(&e)));
                }
            }
        }

        if let Some(text) = &self.bundled {
            match normalize_slice(text.as_bytes(), &self.options) {
                Ok(report) => {
                    tracing::debug!("Using bundled shortcut document");
                    return Ok(LoadedCatalog {
                        report,
                        source: CatalogSource::Bundled,
                    });
                }
                Err(e) => {
                    let e = LoadError::Bundled(e);
                    tracing::warn!(error = %e, "Bundled shortcut document is unusable");
                    attempts.push(format!("{}: {}", CatalogSource::Bundled, describe_failure(&e)));
                }
            }
        }

        Err(LoadError::NoUsableSource { attempts })
    }
}

/// Read and normalize a single document file.
///
/// # Errors
///
/// Returns `LoadError::Read` when the file cannot be read and
/// `LoadError::Invalid` when its contents cannot be normalized.
pub fn read_document(path: &Path, options: &NormalizeOptions) -> Result<NormalizeReport, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    normalize_slice(&bytes, options).map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

fn describe_failure(error: &LoadError) -> String {
    match error {
        LoadError::Read { source, .. } | LoadError::ReadDir { source, .. } => source.to_string(),
        LoadError::Invalid { source, .. } | LoadError::Bundled(source) => source.to_string(),
        other => other.to_string(),
    }
}
