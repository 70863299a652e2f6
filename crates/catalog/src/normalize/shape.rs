//! Top-level shape coercion.
//!
//! Accepted shapes, tried in order (first match wins):
//! 1. an array of programs;
//! 2. an object holding the program array under a wrapper key (`apps`, `programs`);
//! 3. a single program object, treated as a one-element list.

use serde_json::Value;

use super::error::NormalizeError;
use crate::constants::{PROGRAM_NAME_FIELDS, WRAPPER_KEYS};
use crate::decode::{Field, describe, text};

/// Return the raw program entries of a document.
pub(crate) fn program_entries(raw: &Value) -> Result<&[Value], NormalizeError> {
    match raw {
        Value::Array(items) => Ok(items),
        Value::Object(object) => {
            if let Some(items) = WRAPPER_KEYS
                .iter()
                .find_map(|key| object.get(*key).and_then(Value::as_array))
            {
                return Ok(items);
            }
            if let Field::Present(_) = text(object, PROGRAM_NAME_FIELDS) {
                return Ok(std::slice::from_ref(raw));
            }
            Err(NormalizeError::InvalidFormat {
                found: "an object without an `apps` array or `appName`".to_string(),
            })
        }
        other => Err(NormalizeError::InvalidFormat {
            found: describe(other).to_string(),
        }),
    }
}
