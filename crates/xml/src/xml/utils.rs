//! Naming helpers shared by the synthesizer.
//!
//! These implement the key conventions of JSON-shaped example values: numeric keys stand for
//! sequence positions and a trailing plural marker separates a container name from the name
//! of its items.

use serde_json::Value;

/// Checks if a key stands for a sequence position.
///
/// Position keys are non-empty runs of ASCII digits (`0`, `12`). Sequence indices are
/// positional by construction.
pub fn is_positional_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// Strips the plural suffix from a name.
///
/// Returns the name unchanged if it doesn't end with `suffix`, or if nothing would be left.
pub fn singular<'a>(name: &'a str, suffix: &str) -> &'a str {
    match name.strip_suffix(suffix) {
        Some(stem) if !suffix.is_empty() && !stem.is_empty() => stem,
        _ => name,
    }
}

/// Converts a Rust boolean to its string representation for XML.
pub fn bool_to_string(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Text content of a scalar value. `null` has none; composites are not scalars.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(bool_to_string(*b).to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Checks if a value is a map or a sequence.
pub fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Checks if a top-level example entry carries nothing worth rendering.
///
/// `null`, `false`, empty strings and empty composites are dropped; `0` is a real value.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(true) | Value::Number(_) => false,
    }
}
