//! Stable identifier tooling for raw shortcut documents.
//!
//! Responsibilities:
//! - Collect explicit `id` values with a human-readable location.
//! - Audit one or more documents for duplicate and missing ids.
//! - Compare the id sets of two document revisions.
//! - Fill in missing ids in place.
//!
//! Does NOT handle:
//! - Validation of entries; these functions walk every object in the raw
//!   tree, including entries the normalizer would drop.
//! - Reading or writing files (the CLI owns I/O).
//!
//! Invariants:
//! - Locations have the form `source:level:name`, with `<unknown>` for a
//!   missing name.
//! - An id counts as present when it is a non-blank string or a number.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value;

use crate::constants::{GROUP_NAME_FIELDS, PROGRAM_NAME_FIELDS, WRAPPER_KEYS};
use crate::decode::{Field, Object, identifier, text};
use crate::normalize::EntryLevel;

const UNKNOWN_NAME: &str = "<unknown>";

/// An explicit id and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdRecord {
    pub id: String,
    pub location: String,
}

/// Result of auditing documents for id problems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdAudit {
    /// Ids that occur more than once, with every location they occur at.
    pub duplicates: BTreeMap<String, Vec<String>>,
    /// Locations of entries without an id.
    pub missing: Vec<String>,
}

impl IdAudit {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.missing.is_empty()
    }
}

/// Ids added and removed between two revisions, each sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl IdDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Collect every explicit program, group, and shortcut id in `doc`.
pub fn collect_ids(doc: &Value, source: &str) -> Vec<IdRecord> {
    let mut records = Vec::new();
    walk(doc, &mut |level, object| {
        if let Some(id) = identifier(object) {
            records.push(IdRecord {
                id,
                location: location(source, level, object),
            });
        }
    });
    records
}

/// Locations of every program, group, and shortcut in `doc` without an id.
pub fn missing_ids(doc: &Value, source: &str) -> Vec<String> {
    let mut missing = Vec::new();
    walk(doc, &mut |level, object| {
        if identifier(object).is_none() {
            missing.push(location(source, level, object));
        }
    });
    missing
}

/// Audit a set of `(source, document)` pairs as one id space.
pub fn audit_ids<'a, I>(documents: I) -> IdAudit
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    let mut locations: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut missing = Vec::new();
    for (source, doc) in documents {
        for record in collect_ids(doc, source) {
            locations.entry(record.id).or_default().push(record.location);
        }
        missing.extend(missing_ids(doc, source));
    }
    locations.retain(|_, found| found.len() > 1);

    IdAudit {
        duplicates: locations,
        missing,
    }
}

/// Compare the explicit ids of two revisions of a document.
pub fn diff_ids(old: &Value, new: &Value) -> IdDiff {
    let old: BTreeSet<String> = collect_ids(old, "").into_iter().map(|r| r.id).collect();
    let new: BTreeSet<String> = collect_ids(new, "").into_iter().map(|r| r.id).collect();
    IdDiff {
        added: new.difference(&old).cloned().collect(),
        removed: old.difference(&new).cloned().collect(),
    }
}

/// Give every program, group, and shortcut without an id a fresh one.
///
/// Returns the number of ids assigned.
pub fn assign_missing_ids(doc: &mut Value, generate: &mut impl FnMut() -> String) -> usize {
    let mut assigned = 0;
    for program in programs_mut(doc) {
        assigned += assign(program, generate);
        for group in children_mut(program, "groups") {
            assigned += assign(group, generate);
            for shortcut in children_mut(group, "shortcuts") {
                assigned += assign(shortcut, generate);
            }
        }
    }
    assigned
}

/// A random (v4) UUID, the id format used when assigning ids.
pub fn random_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn assign(object: &mut Object, generate: &mut impl FnMut() -> String) -> usize {
    if identifier(object).is_some() {
        return 0;
    }
    object.insert("id".to_string(), Value::String(generate()));
    1
}

fn walk(doc: &Value, visit: &mut impl FnMut(EntryLevel, &Object)) {
    for program in programs(doc) {
        visit(EntryLevel::Program, program);
        for group in children(program, "groups") {
            visit(EntryLevel::Group, group);
            for shortcut in children(group, "shortcuts") {
                visit(EntryLevel::Shortcut, shortcut);
            }
        }
    }
}

fn location(source: &str, level: EntryLevel, object: &Object) -> String {
    let names = match level {
        EntryLevel::Program => PROGRAM_NAME_FIELDS,
        EntryLevel::Group => GROUP_NAME_FIELDS,
        EntryLevel::Shortcut | EntryLevel::Step => &["action"],
    };
    let name = text(object, names).ok();
    format!("{source}:{level}:{}", name.as_deref().unwrap_or(UNKNOWN_NAME))
}

fn wrapper_key(map: &Object) -> Option<&'static str> {
    WRAPPER_KEYS
        .iter()
        .copied()
        .find(|key| map.get(*key).is_some_and(Value::is_array))
}

fn programs(doc: &Value) -> Vec<&Object> {
    match doc {
        Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
        Value::Object(map) => match wrapper_key(map) {
            Some(key) => children(map, key).collect(),
            None if is_single_program(map) => vec![map],
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn programs_mut(doc: &mut Value) -> Vec<&mut Object> {
    match doc {
        Value::Array(items) => items.iter_mut().filter_map(Value::as_object_mut).collect(),
        Value::Object(map) => match wrapper_key(map) {
            Some(key) => children_mut(map, key).collect(),
            None if is_single_program(map) => vec![map],
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// An unwrapped object is a program only when it carries a program name.
fn is_single_program(map: &Object) -> bool {
    matches!(text(map, PROGRAM_NAME_FIELDS), Field::Present(_))
}

fn children<'a>(object: &'a Object, key: &str) -> impl Iterator<Item = &'a Object> + use<'a> {
    object
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

fn children_mut<'a>(
    object: &'a mut Object,
    key: &str,
) -> impl Iterator<Item = &'a mut Object> + use<'a> {
    object
        .get_mut(key)
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object_mut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!([
            {"id": "p1", "appName": "Editor", "groups": [
                {"id": "g1", "groupName": "Edit", "shortcuts": [
                    {"id": "s1", "action": "Copy"},
                    {"action": "Paste"},
                    {"id": "s1", "action": "Cut"}
                ]},
                {"groupName": "View", "shortcuts": []}
            ]},
            {"id": 7, "name": "Terminal"}
        ])
    }

    #[test]
    fn test_collect_ids_with_locations() {
        let records = collect_ids(&doc(), "a.json");
        let pairs: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.id.as_str(), r.location.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("p1", "a.json:program:Editor"),
                ("g1", "a.json:group:Edit"),
                ("s1", "a.json:shortcut:Copy"),
                ("s1", "a.json:shortcut:Cut"),
                ("7", "a.json:program:Terminal"),
            ]
        );
    }

    #[test]
    fn test_missing_ids_reports_unknown_names() {
        let doc = json!({"apps": [
            {"groups": [{"groupName": "G", "id": "", "shortcuts": [{"id": "x"}]}]}
        ]});
        assert_eq!(
            missing_ids(&doc, "w.json"),
            ["w.json:program:<unknown>", "w.json:group:G"]
        );
    }

    #[test]
    fn test_audit_finds_duplicates_across_documents() {
        let first = doc();
        let second = json!({"id": "p1", "appName": "Browser", "groups": []});
        let audit = audit_ids([("a.json", &first), ("b.json", &second)]);

        assert!(!audit.is_clean());
        assert_eq!(
            audit.duplicates.keys().map(String::as_str).collect::<Vec<_>>(),
            ["p1", "s1"]
        );
        assert_eq!(
            audit.duplicates["p1"],
            ["a.json:program:Editor", "b.json:program:Browser"]
        );
        assert_eq!(
            audit.missing,
            ["a.json:shortcut:Paste", "a.json:group:View"]
        );
    }

    #[test]
    fn test_audit_clean_document() {
        let doc = json!([{"id": "p", "appName": "A", "groups": [
            {"id": "g", "groupName": "G", "shortcuts": [{"id": "s", "action": "x"}]}
        ]}]);
        assert!(audit_ids([("c.json", &doc)]).is_clean());
    }

    #[test]
    fn test_diff_ids_sorted() {
        let old = json!([{"id": "b", "groups": [{"id": "a"}, {"id": "c"}]}]);
        let new = json!([{"id": "b", "groups": [{"id": "z"}, {"id": "d"}]}]);
        let diff = diff_ids(&old, &new);
        assert_eq!(diff.added, ["d", "z"]);
        assert_eq!(diff.removed, ["a", "c"]);
        assert!(diff_ids(&old, &old).is_empty());
    }

    #[test]
    fn test_assign_missing_ids_fills_only_gaps() {
        let mut doc = doc();
        let mut counter = 0;
        let assigned = assign_missing_ids(&mut doc, &mut || {
            counter += 1;
            format!("new-{counter}")
        });

        assert_eq!(assigned, 2);
        assert_eq!(doc[0]["groups"][0]["shortcuts"][1]["id"], "new-1");
        assert_eq!(doc[0]["groups"][1]["id"], "new-2");
        assert_eq!(doc[0]["id"], "p1");
        assert_eq!(doc[1]["id"], 7);
        assert!(missing_ids(&doc, "a.json").is_empty());
    }

    #[test]
    fn test_assign_handles_wrapper_and_single_shapes() {
        let mut wrapped = json!({"programs": [{"appName": "A", "groups": []}]});
        assert_eq!(assign_missing_ids(&mut wrapped, &mut random_id), 1);
        assert!(wrapped["programs"][0]["id"].is_string());

        let mut single = json!({"appName": "A", "groups": [{"groupName": "G"}]});
        assert_eq!(assign_missing_ids(&mut single, &mut random_id), 2);

        let mut unnamed = json!({"groups": [{"groupName": "G"}]});
        assert_eq!(assign_missing_ids(&mut unnamed, &mut random_id), 0);
        assert!(unnamed.get("id").is_none());
        assert!(missing_ids(&unnamed, "u.json").is_empty());

        let mut scalar = json!(3);
        assert_eq!(assign_missing_ids(&mut scalar, &mut random_id), 0);
    }

    #[test]
    fn test_random_id_is_uuid_v4() {
        let id = random_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(id, random_id());
    }
}
