//! Shortcut document normalization.
//!
//! Responsibilities:
//! - Parse raw text or bytes as JSON.
//! - Coerce the accepted top-level shapes into a list of program entries.
//! - Validate entries, cascading drops bottom-up, and sort each level by order hints.
//! - Default list fields so consumers never see an absent list.
//!
//! Does NOT handle:
//! - Reading documents from disk or choosing between sources (see `loader`).
//! - Display-time hiding of entries (see `display`).
//!
//! Invariants / Assumptions:
//! - Normalization is a pure function of its input and options.
//! - Only invalid JSON and unrecognized top-level shapes are errors; every
//!   finer-grained problem drops the offending entry and is reported.
//! - Sorting is stable: entries without an order hint keep their input order.

mod error;
mod order;
mod report;
mod shape;
mod validate;

pub use error::{ErrorKind, NormalizeError};
pub use report::{DropReason, DroppedEntry, EntryLevel, NormalizeReport};

use serde_json::Value;

use crate::types::Catalog;
use validate::Validator;

/// Options controlling normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Keep entries flagged `disEnable: true` (still flagged) instead of
    /// dropping them, so a display view can show them on request.
    pub keep_disabled: bool,
    /// Prefix for surrogate ids, used when documents are merged.
    pub id_namespace: Option<String>,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keep_disabled(mut self, keep: bool) -> Self {
        self.keep_disabled = keep;
        self
    }

    pub fn with_id_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.id_namespace = Some(namespace.into());
        self
    }
}

/// Normalize an already-parsed document with default options.
pub fn normalize(raw: &Value) -> Result<Catalog, NormalizeError> {
    normalize_with(raw, &NormalizeOptions::default()).map(|report| report.catalog)
}

/// Parse and normalize a JSON text with default options.
pub fn normalize_str(text: &str) -> Result<Catalog, NormalizeError> {
    let raw: Value = serde_json::from_str(text)?;
    normalize(&raw)
}

/// Parse and normalize raw bytes with the given options.
pub fn normalize_slice(
    bytes: &[u8],
    options: &NormalizeOptions,
) -> Result<NormalizeReport, NormalizeError> {
    let raw: Value = serde_json::from_slice(bytes)?;
    normalize_with(&raw, options)
}

/// Normalize a document and report every excluded entry.
pub fn normalize_with(
    raw: &Value,
    options: &NormalizeOptions,
) -> Result<NormalizeReport, NormalizeError> {
    let entries = shape::program_entries(raw)?;
    let mut validator = Validator::new(options);
    let programs = validator.programs(entries);
    let dropped = validator.into_dropped();

    tracing::debug!(
        programs = programs.len(),
        dropped = dropped.len(),
        "Normalized shortcut document"
    );

    Ok(NormalizeReport {
        catalog: Catalog::new(programs),
        dropped,
    })
}
