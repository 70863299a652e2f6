//! Shortcut and step nodes.

use serde::Serialize;
use serde_json::Number;
use std::fmt;

use super::{EntryId, is_false, order_value};

/// One action mapped to a key combination or a sequence of steps.
///
/// When both `keys` and `steps` are present, `keys` is the simple-render
/// path and `steps` is supplementary detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortcut {
    #[serde(skip_serializing_if = "EntryId::is_surrogate")]
    pub id: EntryId,
    pub action: String,
    pub description: String,
    #[serde(rename = "disEnable", skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Operating-system tags; empty when the document omits them.
    pub os: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

impl Shortcut {
    /// The order hint as a finite number, if present.
    pub fn order_hint(&self) -> Option<f64> {
        order_value(self.order.as_ref())
    }

    /// Returns true if this shortcut renders as a step sequence.
    pub fn is_multi_step(&self) -> bool {
        self.keys.is_empty() && !self.steps.is_empty()
    }

    /// The key combination joined with `separator`, if the shortcut has keys.
    pub fn key_combo(&self, separator: &str) -> Option<String> {
        if self.keys.is_empty() {
            None
        } else {
            Some(self.keys.join(separator))
        }
    }
}

/// Kind of a single step in a multi-step shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    /// Press a key combination.
    Keys,
    /// Type text.
    Input,
    /// Interact with the UI (click, select, ...).
    Ui,
    /// Pause.
    Wait,
    /// Run another named macro.
    MacroRef,
}

impl StepKind {
    /// Parse the wire name of a step kind.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "keys" => Some(Self::Keys),
            "input" => Some(Self::Input),
            "ui" => Some(Self::Ui),
            "wait" => Some(Self::Wait),
            "macroRef" => Some(Self::MacroRef),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keys => "keys",
            Self::Input => "input",
            Self::Ui => "ui",
            Self::Wait => "wait",
            Self::MacroRef => "macroRef",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of a multi-step shortcut.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in milliseconds (for `wait` steps).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl Step {
    /// Human-readable label: the description, else the action unless it is
    /// the generic `Seq` placeholder.
    pub fn label(&self) -> Option<&str> {
        if let Some(description) = self.description.as_deref() {
            return Some(description);
        }
        self.action
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty() && !a.eq_ignore_ascii_case("seq"))
    }
}
