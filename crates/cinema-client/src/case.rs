//! Key case conversion at the JSON boundary
//!
//! The backend speaks snake_case, the client types speak camelCase.
//! [`serialize`] prepares outgoing bodies, [`deserialize`] normalizes
//! incoming ones. Only object keys are rewritten; string values, numbers
//! and array order are left alone.

use serde_json::{Map, Value};

/// Rewrite every object key from camelCase to snake_case (outgoing bodies)
pub fn serialize(value: Value) -> Value {
    rewrite_keys(value, &camel_to_snake)
}

/// Rewrite every object key from snake_case to camelCase (incoming bodies)
pub fn deserialize(value: Value) -> Value {
    rewrite_keys(value, &snake_to_camel)
}

fn rewrite_keys(value: Value, convert: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let rewritten: Map<String, Value> = map
                .into_iter()
                .map(|(key, inner)| (convert(&key), rewrite_keys(inner, convert)))
                .collect();
            Value::Object(rewritten)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rewrite_keys(item, convert))
                .collect(),
        ),
        other => other,
    }
}

/// `birthDate` -> `birth_date`
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `birth_date` -> `birthDate`
///
/// An underscore is only consumed when an ASCII lowercase letter follows it.
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}
