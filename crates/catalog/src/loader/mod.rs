//! Shortcut document loading from files, directories, and embedded text.
//!
//! Responsibilities:
//! - Read shortcut documents from disk and normalize them.
//! - Provide a builder-pattern `CatalogLoader` that tries candidate sources in order.
//! - Discover per-application documents in a library directory and merge a selection.
//!
//! Does NOT handle:
//! - Normalization rules themselves (see `normalize`).
//! - Remembering which library documents the user selected (front end state).
//!
//! Invariants / Assumptions:
//! - Explicit candidate paths are tried before `KEYSHEET_CONFIG_PATH`, and the
//!   bundled document is always tried last.
//! - A candidate that cannot be read or normalized never aborts the chain.

mod builder;
mod env;
mod error;
mod library;

pub use builder::{CatalogLoader, CatalogSource, LoadedCatalog, read_document};
pub use env::env_var_or_none;
pub use error::LoadError;
pub use library::{Library, LibraryEntry};
