//! Error types for document normalization.
//!
//! Invariants:
//! - Only whole-document failures are errors. Malformed entries are dropped and
//!   reported through `NormalizeReport::dropped`, never through this type.

use thiserror::Error;

/// Category of a normalization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not syntactically valid JSON.
    ParseError,
    /// The input is JSON but not a recognized top-level shape.
    InvalidFormat,
}

/// Errors that abort normalization of a whole document.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "Unrecognized document shape: expected an array of programs, an object with an `apps` array, or a single program, found {found}"
    )]
    InvalidFormat { found: String },
}

impl NormalizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NormalizeError::Parse(_) => ErrorKind::ParseError,
            NormalizeError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
        }
    }
}
