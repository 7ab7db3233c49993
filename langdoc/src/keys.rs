//! Nested ↔ dot-flattened JSON key transcoding.
//!
//! Translation files come in two on-disk shapes: nested objects
//! (`{"a": {"b": "v"}}`) and flattened single-level maps (`{"a.b": "v"}`).
//! [`flatten`] and [`nest`] convert between them; both preserve key order.

use serde_json::Value;

use crate::{error::Error, traits::Parser};

/// An insertion-ordered JSON object, the in-memory shape of every
/// translation file (nested or flattened).
pub type JsonMap = serde_json::Map<String, Value>;

impl Parser for JsonMap {
    /// Parse from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::Parse)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Flattens a nested map into dot-joined keys.
///
/// Object values recurse, re-prefixing every produced key as
/// `"<key>.<nested>"`; scalar values (strings, numbers, booleans, null) are
/// copied unchanged. Arrays are treated as scalar leaves. An empty object at
/// any level contributes zero keys. Idempotent on already-flat maps.
pub fn flatten(nested: &JsonMap) -> JsonMap {
    let mut flat = JsonMap::new();
    for (key, value) in nested {
        match value {
            Value::Object(inner) => {
                for (nested_key, nested_value) in flatten(inner) {
                    flat.insert(format!("{}.{}", key, nested_key), nested_value);
                }
            }
            scalar => {
                flat.insert(key.clone(), scalar.clone());
            }
        }
    }
    flat
}

/// Nests a flattened map by splitting keys on `.` into path segments.
///
/// Intermediate objects are created as needed; the scalar is assigned at the
/// final segment. Conflicting structure is rejected rather than silently
/// resolved: if one key terminates where another continues as a container
/// (e.g. `"a"` and `"a.b"` in the same map), this returns
/// [`Error::MalformedInput`] naming the offending key.
pub fn nest(flat: &JsonMap) -> Result<JsonMap, Error> {
    let mut root = JsonMap::new();
    for (key, value) in flat {
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(last) = segments.pop() else {
            continue;
        };

        let mut current = &mut root;
        for segment in &segments {
            let slot = current
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Object(JsonMap::new()));
            current = match slot {
                Value::Object(inner) => inner,
                _ => {
                    return Err(Error::malformed_input(format!(
                        "key `{}` continues through `{}`, which another key assigned a scalar",
                        key, segment
                    )));
                }
            };
        }

        if current.contains_key(last) {
            return Err(Error::malformed_input(format!(
                "key `{}` terminates where another key continues as a container",
                key
            )));
        }
        current.insert(last.to_string(), value.clone());
    }
    Ok(root)
}

/// Borrows all entries of a flattened map as `(key, value)` string pairs,
/// failing fast on the first non-string value.
///
/// The table join and the statistics scanner both assume a fully flattened,
/// all-string map; this is the shared guard.
pub fn string_values(flat: &JsonMap) -> Result<Vec<(&str, &str)>, Error> {
    flat.iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key.as_str(), s.as_str())),
            other => Err(Error::malformed_input(format!(
                "key `{}` has value of type `{}`, expected a flattened map with only string values",
                key,
                json_type_name(other)
            ))),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
