//! Best-effort field decoding over untyped JSON objects.
//!
//! Responsibilities:
//! - Read one field at a time from a `serde_json` object.
//! - Distinguish "absent" from "present with the wrong type" for diagnostics.
//!
//! Invariants:
//! - Decoding a single field never fails the enclosing entry by itself; the
//!   caller decides whether a missing or invalid field is fatal for that entry.
//! - `null` is treated the same as an absent field.

use serde_json::{Map, Number, Value};

/// Outcome of decoding a single field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Field<T> {
    Present(T),
    Absent,
    Invalid,
}

impl<T> Field<T> {
    pub(crate) fn ok(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::Invalid => None,
        }
    }

    pub(crate) fn is_invalid(&self) -> bool {
        matches!(self, Field::Invalid)
    }
}

pub(crate) type Object = Map<String, Value>;

/// Look up the first of `names` that is present and not null.
fn lookup<'a>(object: &'a Object, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| object.get(*name))
        .find(|value| !value.is_null())
}

/// A string field.
pub(crate) fn text(object: &Object, names: &[&str]) -> Field<String> {
    match lookup(object, names) {
        None => Field::Absent,
        Some(Value::String(s)) => Field::Present(s.clone()),
        Some(_) => Field::Invalid,
    }
}

/// A required string field: present, a string, and not blank.
pub(crate) fn required_text(object: &Object, names: &[&str]) -> Option<String> {
    text(object, names).ok().filter(|s| !s.trim().is_empty())
}

/// A boolean flag that is set only by a literal `true`.
pub(crate) fn flag(object: &Object, names: &[&str]) -> bool {
    matches!(lookup(object, names), Some(Value::Bool(true)))
}

/// A finite numeric field, kept in its original JSON representation.
pub(crate) fn number(object: &Object, name: &str) -> Field<Number> {
    match lookup(object, &[name]) {
        None => Field::Absent,
        Some(Value::Number(n)) if n.as_f64().is_some_and(f64::is_finite) => {
            Field::Present(n.clone())
        }
        Some(_) => Field::Invalid,
    }
}

/// A non-negative integer field.
pub(crate) fn unsigned(object: &Object, name: &str) -> Field<u64> {
    match lookup(object, &[name]) {
        None => Field::Absent,
        Some(value) => value.as_u64().map_or(Field::Invalid, Field::Present),
    }
}

/// An array field, borrowed.
pub(crate) fn array<'a>(object: &'a Object, name: &str) -> Field<&'a Vec<Value>> {
    match lookup(object, &[name]) {
        None => Field::Absent,
        Some(Value::Array(items)) => Field::Present(items),
        Some(_) => Field::Invalid,
    }
}

/// An array of strings. Any non-string element invalidates the whole field.
pub(crate) fn string_list(object: &Object, name: &str) -> Field<Vec<String>> {
    match array(object, name) {
        Field::Present(items) => items
            .iter()
            .map(|item| item.as_str().map(String::from))
            .collect::<Option<Vec<_>>>()
            .map_or(Field::Invalid, Field::Present),
        Field::Absent => Field::Absent,
        Field::Invalid => Field::Invalid,
    }
}

/// The entry's `id`: a non-blank string, or a number rendered as text.
pub(crate) fn identifier(object: &Object) -> Option<String> {
    match lookup(object, &["id"])? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Short description of a JSON value's type for diagnostics.
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
