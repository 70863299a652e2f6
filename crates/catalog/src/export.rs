//! Export of a catalog back to the document wire format.
//!
//! Shortcuts the user hid are written with `disEnable: true`, so the exported
//! document carries the hiding to other front ends. Surrogate ids are not
//! written; explicit ids round-trip unchanged.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::types::{Catalog, EntryId};

/// Serialize `catalog` as a pretty-printed document with sorted keys.
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn export_json(catalog: &Catalog, hidden_ids: &HashSet<EntryId>) -> Result<String, serde_json::Error> {
    let mut exported = catalog.clone();
    let mut marked = 0usize;
    for program in &mut exported.programs {
        for group in &mut program.groups {
            for shortcut in &mut group.shortcuts {
                if hidden_ids.contains(&shortcut.id) && !shortcut.disabled {
                    shortcut.disabled = true;
                    marked += 1;
                }
            }
        }
    }
    tracing::debug!(marked, "Exporting shortcut document");

    let value = sort_keys(serde_json::to_value(&exported)?);
    serde_json::to_string_pretty(&value)
}

/// Rebuild every object in `value` with its keys in ascending order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{NormalizeOptions, normalize_str, normalize_with};
    use serde_json::json;

    fn source() -> Value {
        json!([
            {"id": "p", "appName": "Editor", "order": 1, "groups": [
                {"id": "g", "groupName": "Edit", "shortcuts": [
                    {"id": "copy", "action": "Copy", "description": "Copy selection", "keys": ["Ctrl", "C"], "os": ["windows"]},
                    {"action": "Paste", "description": "Paste", "keys": ["Ctrl", "V"], "order": 0.5},
                    {"id": "macro", "action": "Save all", "description": "", "steps": [
                        {"type": "keys", "keys": ["Ctrl", "K"]},
                        {"type": "wait", "duration": 150}
                    ]}
                ]}
            ]}
        ])
    }

    fn catalog() -> Catalog {
        normalize_with(&source(), &NormalizeOptions::new())
            .unwrap()
            .catalog
    }

    #[test]
    fn test_export_uses_wire_names_and_sorted_keys() {
        let text = export_json(&catalog(), &HashSet::new()).unwrap();

        assert!(text.contains("\"appName\": \"Editor\""));
        assert!(text.contains("\"groupName\": \"Edit\""));
        assert!(!text.contains("disEnable"));
        let action = text.find("\"action\"").unwrap();
        let description = text.find("\"description\"").unwrap();
        assert!(action < description);
    }

    #[test]
    fn test_every_object_has_sorted_keys() {
        let text = export_json(&catalog(), &HashSet::new()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        fn check(value: &Value) {
            match value {
                Value::Object(map) => {
                    let keys: Vec<&String> = map.keys().collect();
                    let mut sorted = keys.clone();
                    sorted.sort();
                    assert_eq!(keys, sorted);
                    map.values().for_each(check);
                }
                Value::Array(items) => items.iter().for_each(check),
                _ => {}
            }
        }
        check(&value);
        assert!(text.find("\"appName\"").unwrap() < text.find("\"groups\"").unwrap());
    }

    #[test]
    fn test_sort_keys_is_recursive() {
        let sorted = sort_keys(json!({"z": [{"b": 1, "a": 2}], "a": {"y": 0, "x": 0}}));
        assert_eq!(
            serde_json::to_string(&sorted).unwrap(),
            r#"{"a":{"x":0,"y":0},"z":[{"a":2,"b":1}]}"#
        );
    }

    #[test]
    fn test_hidden_shortcuts_exported_disabled() {
        let hidden: HashSet<EntryId> = [EntryId::from("copy")].into_iter().collect();
        let text = export_json(&catalog(), &hidden).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        let shortcuts = &value[0]["groups"][0]["shortcuts"];
        let copy = shortcuts
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["id"] == "copy")
            .unwrap();
        assert_eq!(copy["disEnable"], true);
        assert_eq!(value[0]["disEnable"], Value::Null);
    }

    #[test]
    fn test_surrogate_ids_not_exported() {
        let text = export_json(&catalog(), &HashSet::new()).unwrap();
        assert!(!text.contains("program-0"));
    }

    #[test]
    fn test_export_is_accepted_by_normalizer() {
        let original = catalog();
        let text = export_json(&original, &HashSet::new()).unwrap();
        let reloaded = normalize_str(&text).unwrap();

        let actions = |c: &Catalog| -> Vec<String> {
            c.shortcuts().map(|(_, _, s)| s.action.clone()).collect()
        };
        assert_eq!(actions(&reloaded), actions(&original));
        assert_eq!(actions(&reloaded), ["Paste", "Copy", "Save all"]);
        assert_eq!(reloaded.programs[0].groups[0].shortcuts[2].steps[1].duration, Some(150));
    }

    #[test]
    fn test_hidden_export_drops_on_reload() {
        let hidden: HashSet<EntryId> = [EntryId::from("copy")].into_iter().collect();
        let text = export_json(&catalog(), &hidden).unwrap();
        let reloaded = normalize_str(&text).unwrap();
        assert!(reloaded.find_shortcut("Copy").is_none());
        assert!(reloaded.find_shortcut("Paste").is_some());
    }
}
