//! Diagnostics for entries excluded during normalization.

use serde::Serialize;
use std::fmt;

use crate::types::Catalog;

/// Tree level of a dropped entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryLevel {
    Program,
    Group,
    Shortcut,
    Step,
}

impl fmt::Display for EntryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Program => write!(f, "program"),
            Self::Group => write!(f, "group"),
            Self::Shortcut => write!(f, "shortcut"),
            Self::Step => write!(f, "step"),
        }
    }
}

/// Why an entry was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// The entry is not a JSON object.
    NotAnObject,
    /// `disEnable: true` and disabled entries are not being kept.
    Disabled,
    /// Program or group without a usable name.
    MissingName,
    /// Program without a `groups` array.
    MissingGroups,
    /// Group without a `shortcuts` array.
    MissingShortcuts,
    /// Shortcut without a usable `action`.
    MissingAction,
    /// Shortcut without a `description` string.
    MissingDescription,
    /// Shortcut with neither non-empty `keys` nor non-empty `steps`.
    MissingKeys,
    /// Step without a recognized `type`.
    UnknownStepType,
    /// Every child of the entry was dropped.
    NoSurvivingChildren,
}

impl DropReason {
    /// Returns true for reasons that indicate a malformed document rather
    /// than an intentional exclusion.
    pub fn is_malformed(self) -> bool {
        !matches!(self, Self::Disabled | Self::NoSurvivingChildren)
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotAnObject => "not an object",
            Self::Disabled => "disabled",
            Self::MissingName => "missing name",
            Self::MissingGroups => "missing groups",
            Self::MissingShortcuts => "missing shortcuts",
            Self::MissingAction => "missing action",
            Self::MissingDescription => "missing description",
            Self::MissingKeys => "missing keys or steps",
            Self::UnknownStepType => "unknown step type",
            Self::NoSurvivingChildren => "no valid entries left",
        };
        f.write_str(text)
    }
}

/// One excluded entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedEntry {
    pub level: EntryLevel,
    /// Position in the input document, e.g. `program-0/group-2/shortcut-1`.
    pub location: String,
    /// The entry's name or action, when it had one.
    pub name: Option<String>,
    pub reason: DropReason,
}

impl fmt::Display for DroppedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level, self.location)?;
        if let Some(name) = &self.name {
            write!(f, " ({name})")?;
        }
        write!(f, ": {}", self.reason)
    }
}

/// Normalized catalog plus the entries that were excluded on the way.
#[derive(Debug, Clone, Default)]
pub struct NormalizeReport {
    pub catalog: Catalog,
    pub dropped: Vec<DroppedEntry>,
}

impl NormalizeReport {
    /// Dropped entries that point at mistakes in the document.
    pub fn malformed(&self) -> impl Iterator<Item = &DroppedEntry> {
        self.dropped.iter().filter(|d| d.reason.is_malformed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_entry_display() {
        let entry = DroppedEntry {
            level: EntryLevel::Shortcut,
            location: "program-0/group-1/shortcut-3".into(),
            name: Some("Copy".into()),
            reason: DropReason::MissingKeys,
        };
        assert_eq!(
            entry.to_string(),
            "shortcut program-0/group-1/shortcut-3 (Copy): missing keys or steps"
        );
    }

    #[test]
    fn test_malformed_classification() {
        assert!(DropReason::MissingAction.is_malformed());
        assert!(DropReason::NotAnObject.is_malformed());
        assert!(!DropReason::Disabled.is_malformed());
        assert!(!DropReason::NoSurvivingChildren.is_malformed());
    }
}
