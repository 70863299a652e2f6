//! Program and group nodes.

use serde::Serialize;
use serde_json::Number;

use super::{EntryId, Shortcut, is_false, order_value};

/// A top-level entry, typically one real-world application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    #[serde(skip_serializing_if = "EntryId::is_surrogate")]
    pub id: EntryId,
    #[serde(rename = "appName")]
    pub name: String,
    #[serde(rename = "disEnable", skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub groups: Vec<Group>,
}

impl Program {
    /// The order hint as a finite number, if present.
    pub fn order_hint(&self) -> Option<f64> {
        order_value(self.order.as_ref())
    }

    /// Total number of shortcuts across all groups.
    pub fn shortcut_count(&self) -> usize {
        self.groups.iter().map(|g| g.shortcuts.len()).sum()
    }
}

/// A named cluster of related shortcuts within a program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    #[serde(skip_serializing_if = "EntryId::is_surrogate")]
    pub id: EntryId,
    #[serde(rename = "groupName")]
    pub name: String,
    #[serde(rename = "disEnable", skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub shortcuts: Vec<Shortcut>,
}

impl Group {
    /// The order hint as a finite number, if present.
    pub fn order_hint(&self) -> Option<f64> {
        order_value(self.order.as_ref())
    }
}
