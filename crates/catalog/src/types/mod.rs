//! Catalog type definitions.
//!
//! Responsibilities:
//! - Define the three-level tree: `Program` → `Group` → `Shortcut` (+ `Step`).
//! - Define `EntryId`, the identifier shared by every node.
//! - Serialize nodes back to the document wire format (`appName`, `groupName`, `disEnable`).
//!
//! Does NOT handle:
//! - Decoding raw JSON into these types (see `normalize` module).
//! - Filtering for display (see `display` module).
//!
//! Invariants:
//! - A `Catalog` produced by the normalizer never contains an empty `Group` or `Program`.
//! - List fields are never absent; an omitted list is an empty `Vec`.
//! - Surrogate ids are not serialized, so an exported document re-normalizes to fresh positions.

mod catalog;
mod id;
mod program;
mod shortcut;

pub use catalog::{Catalog, ShortcutPosition};
pub use id::EntryId;
pub use program::{Group, Program};
pub use shortcut::{Shortcut, Step, StepKind};

/// Serde helper: skip `disEnable` when it is false.
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Numeric value of an order hint, if it is finite.
pub(crate) fn order_value(order: Option<&serde_json::Number>) -> Option<f64> {
    order.and_then(serde_json::Number::as_f64).filter(|v| v.is_finite())
}
