//! Tolerant field decoders for the contributor-edited data file.
//!
//! `#[serde(default)]` only covers absent keys. The data file is checked by
//! the validator, which reports `null`, wrongly typed scalars and non-array
//! lists as errors; decoding must still succeed for those documents so they
//! can be rendered. Each helper here is used through
//! `#[serde(deserialize_with = "...")]`:
//!
//! | Input                   | `text`         | `text_list` / `list` | `optional_list` |
//! |-------------------------|----------------|----------------------|-----------------|
//! | `null`                  | `""`           | `[]`                 | `None`          |
//! | `true`, `1.0`           | `"true"`, `"1.0"` | `[]`              | `None`          |
//! | array / object          | `""`           | elements / `[]`      | elements / `None` |
//!
//! List elements that are not objects decode to the element type's default.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A string field: `null` becomes empty, numbers and booleans their text.
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?))
}

/// A list of strings: anything but an array becomes empty.
pub(crate) fn text_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(value_text).collect(),
        _ => Vec::new(),
    })
}

/// A list of objects: anything but an array becomes empty.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(element).collect(),
        _ => Ok(Vec::new()),
    }
}

/// An optional list of objects: anything but an array is `None`.
pub(crate) fn optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(element)
            .collect::<Result<Vec<T>, D::Error>>()
            .map(Some),
        _ => Ok(None),
    }
}

/// A nested object: anything but an object becomes the default.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    element(Value::deserialize(deserializer)?)
}

fn element<T, E>(value: Value) -> Result<T, E>
where
    T: DeserializeOwned + Default,
    E: Error,
{
    if value.is_object() {
        serde_json::from_value(value).map_err(E::custom)
    } else {
        Ok(T::default())
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
