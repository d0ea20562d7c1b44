//! Value-level operations over in-memory JSON trees.
//!
//! The serde paths in [`crate::as_string`] and [`crate::key_map`] cover
//! documents; this module covers code that already holds a
//! `serde_json::Value` and wants the same string encoding without going
//! through a serializer.

use serde_json::Value;

use crate::convert::Stringify;
use crate::errors::{Result, StringifyError};

/// Encode a value as a JSON string token.
pub fn to_value<T: Stringify>(value: &T) -> Value {
    Value::String(value.to_text())
}

/// Decode a value from a JSON string token.
///
/// Any other token kind is refused, never coerced.
pub fn from_value<T: Stringify>(value: &Value) -> Result<T> {
    match value {
        Value::String(text) => T::from_text(text),
        other => {
            let found = token_kind(other);
            tracing::debug!("refusing {} where a JSON string was required", found);
            Err(StringifyError::NotAString { found })
        }
    }
}

/// Encode a value as a JSON object member name.
pub fn to_key<T: Stringify>(value: &T) -> String {
    value.to_text()
}

/// Decode a value from a JSON object member name.
///
/// Member names are strings by the format's definition, so unlike
/// [`from_value`] there is no token kind to check; only the type's own
/// constructor can fail here.
pub fn from_key<T: Stringify>(name: &str) -> Result<T> {
    T::from_text(name)
}

/// Print a value as a standalone JSON document: a quoted, escaped string.
pub fn to_json<T: Stringify>(value: &T) -> Result<String> {
    serde_json::to_string(&to_value(value)).map_err(Into::into)
}

/// Parse a standalone JSON document that must hold a single string token.
pub fn from_json<T: Stringify>(json: &str) -> Result<T> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

/// Name of the JSON token kind held by `value`, for diagnostics.
pub fn token_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
