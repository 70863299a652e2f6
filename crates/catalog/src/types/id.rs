//! Entry identifiers.
//!
//! Documents may carry an explicit `id` on any program, group, or shortcut.
//! Entries without one get a surrogate derived from their position in the
//! input document, so the same document always yields the same ids.

use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a catalog entry.
///
/// Equality, ordering, and hashing consider only the identifier text, so an
/// id supplied by a caller (e.g. a hidden-shortcut list) matches an entry
/// whether that entry's id was explicit or a surrogate.
#[derive(Debug, Clone)]
pub struct EntryId {
    value: String,
    surrogate: bool,
}

impl EntryId {
    /// An identifier taken from the document.
    pub fn explicit(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            surrogate: false,
        }
    }

    /// A positional identifier for an entry without an explicit id.
    pub(crate) fn surrogate(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            surrogate: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns true if this id was generated from the entry's position.
    pub fn is_surrogate(&self) -> bool {
        self.surrogate
    }
}

impl PartialEq for EntryId {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EntryId {}

impl Hash for EntryId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for EntryId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntryId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self::explicit(value)
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self::explicit(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for EntryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_origin() {
        let explicit = EntryId::explicit("program-0");
        let surrogate = EntryId::surrogate("program-0");
        assert_eq!(explicit, surrogate);
        assert!(!explicit.is_surrogate());
        assert!(surrogate.is_surrogate());
    }

    #[test]
    fn test_hash_set_lookup_by_str() {
        let mut hidden: HashSet<EntryId> = HashSet::new();
        hidden.insert(EntryId::from("a1b2"));

        assert!(hidden.contains("a1b2"));
        assert!(hidden.contains(&EntryId::surrogate("a1b2")));
        assert!(!hidden.contains("other"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&EntryId::explicit("x-1")).unwrap();
        assert_eq!(json, "\"x-1\"");
    }
}
