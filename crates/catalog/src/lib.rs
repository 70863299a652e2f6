//! Shortcut catalog ingestion for keysheet.
//!
//! This crate turns hand-edited JSON shortcut documents into a validated,
//! ordered, read-only tree of programs, groups, and shortcuts, and provides the
//! derived views and tooling built on top of that tree.

pub mod constants;
mod decode;
pub mod display;
pub mod export;
pub mod ids;
mod loader;
pub mod normalize;
pub mod relay;
pub mod types;

pub use display::{DisplayOptions, filter_for_display};
pub use export::export_json;
pub use ids::{
    IdAudit, IdDiff, IdRecord, assign_missing_ids, audit_ids, collect_ids, diff_ids, missing_ids,
};
pub use loader::{
    CatalogLoader, CatalogSource, Library, LibraryEntry, LoadError, LoadedCatalog,
    env_var_or_none, read_document,
};
pub use normalize::{
    DropReason, DroppedEntry, EntryLevel, ErrorKind, NormalizeError, NormalizeOptions,
    NormalizeReport, normalize, normalize_slice, normalize_str, normalize_with,
};
pub use relay::{DeviceStatus, Dispatched, KeyCommand, KeySink, RelayError, relay_or_copy};
pub use types::{Catalog, EntryId, Group, Program, Shortcut, ShortcutPosition, Step, StepKind};
