use serde_json::{Map, Value};

/// Convert a snake_case string to camelCase.
///
/// Only an underscore directly followed by a lowercase ASCII letter is
/// collapsed; digits, existing uppercase, and doubled or trailing
/// underscores pass through unchanged (`"_1abc"` stays `"_1abc"`).
pub fn snake_to_camel_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '_' && next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Convert a camelCase string to snake_case.
///
/// Every uppercase ASCII letter gets an underscore inserted before it, so
/// a leading uppercase yields a leading underscore (`"Foo"` -> `"_foo"`).
/// That quirk is part of the wire contract and deliberately kept.
pub fn camel_to_snake_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Rewrite every object key in `value` from snake_case to camelCase.
///
/// Recurses through nested objects and through object elements of arrays;
/// scalar values and non-object array elements are copied untouched. The
/// input is never mutated. Round-tripping through [`camel_to_snake`] is
/// not guaranteed for keys that already mix conventions.
pub fn snake_to_camel(value: &Value) -> Value {
    convert_keys(value, &snake_to_camel_string)
}

/// Rewrite every object key in `value` from camelCase to snake_case.
///
/// Same traversal rules as [`snake_to_camel`].
pub fn camel_to_snake(value: &Value) -> Value {
    convert_keys(value, &camel_to_snake_string)
}

fn convert_keys(value: &Value, convert: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, val) in map {
                out.insert(convert(key), convert_keys(val, convert));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(_) => convert_keys(item, convert),
                    other => other.clone(),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}
