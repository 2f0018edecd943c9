//! Loose-truthiness rules for JSON values.
//!
//! The Spark API and the forms feeding it use a loose notion of "empty":
//! zero, `"0"` and empty containers all count. Pagination stops on an empty
//! page and contact sanitization drops empty fields, so both go through
//! [`is_empty_value`].

use serde_json::Value;

/// Returns true if `value` counts as empty.
///
/// Empty values are `null`, `false`, numeric zero (`0`, `-0`, `0.0`), the
/// strings `""` and `"0"`, and empty arrays or objects. Everything else,
/// including `"0.0"`, `" "` and `"false"`, is non-empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i == 0
            } else if let Some(u) = n.as_u64() {
                u == 0
            } else {
                n.as_f64() == Some(0.0)
            }
        }
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Convert a collection key into the JSON value the API expects.
///
/// Keys that are canonical decimal integers (`"12"`, `"-3"`, but not
/// `"012"` or `"+1"`) become numbers; anything else stays a string.
pub fn normalize_key(key: &str) -> Value {
    match canonical_int(key) {
        Some(i) => Value::from(i),
        None => Value::String(key.to_string()),
    }
}

/// Short description of a value's JSON type, for error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn canonical_int(key: &str) -> Option<i64> {
    let parsed: i64 = key.parse().ok()?;
    (parsed.to_string() == key).then_some(parsed)
}
