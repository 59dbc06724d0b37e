//! Coercion of numerically-keyed objects back into arrays.
//!
//! The upstream serializer occasionally writes a list as an object keyed by
//! stringified indices (`{"0": a, "1": b}`), and which tables are affected
//! changes between releases. Every list-typed field goes through here before
//! validation or typed decoding, so the rest of the pipeline only ever sees
//! arrays.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::ShapeError;

/// Coerce `value` into a sequence.
///
/// Arrays are returned unchanged. Objects whose keys all parse as
/// non-negative integers yield their values in ascending numeric key order.
/// Anything else is a [`ShapeError`].
pub fn normalize(value: Value) -> Result<Vec<Value>, ShapeError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(map) => from_indexed_object(map),
        other => Err(ShapeError::NotAnObject(type_name(&other))),
    }
}

fn from_indexed_object(map: Map<String, Value>) -> Result<Vec<Value>, ShapeError> {
    let mut indexed = Vec::with_capacity(map.len());
    for (key, value) in map {
        let index: u64 = key
            .parse()
            .map_err(|_| ShapeError::NonNumericKey(key.clone()))?;
        indexed.push((index, value));
    }
    indexed.sort_by_key(|(index, _)| *index);
    Ok(indexed.into_iter().map(|(_, value)| value).collect())
}

/// Normalize `record[field]` in place.
///
/// A missing or `null` field is left alone; whether that is acceptable is the
/// caller's validation decision.
pub fn normalize_field(record: &mut Map<String, Value>, field: &str) -> Result<(), ShapeError> {
    let Some(slot) = record.get_mut(field) else {
        return Ok(());
    };
    if slot.is_null() || slot.is_array() {
        return Ok(());
    }
    let items = normalize(slot.take())?;
    *slot = Value::Array(items);
    Ok(())
}

/// `deserialize_with` adapter applying [`normalize`] to a list field.
pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(Vec::new());
    }
    let items = normalize(value).map_err(serde::de::Error::custom)?;
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
