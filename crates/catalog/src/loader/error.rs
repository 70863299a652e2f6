//! Error types for document loading.
//!
//! Invariants:
//! - Every variant that concerns a file carries its path.
//! - Normalization failures keep the underlying `NormalizeError` as the source.

use std::path::PathBuf;
use thiserror::Error;

use crate::normalize::NormalizeError;

/// Errors that can occur while loading shortcut documents.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read shortcut document at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid shortcut document at {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: NormalizeError,
    },

    #[error("Invalid bundled shortcut document: {0}")]
    Bundled(#[source] NormalizeError),

    #[error("Failed to list shortcut documents in {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No usable shortcut document (tried: {})", .attempts.join("; "))]
    NoUsableSource { attempts: Vec<String> },
}
