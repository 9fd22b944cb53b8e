//! Field deserializers that absorb malformed values instead of failing the
//! enclosing object.
//!
//! Each value is buffered as JSON first, so a bad field costs only that
//! field (or list entry) and the surrounding operation still parses.

use indexmap::IndexMap;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field, falling back to its default when the value has the
/// wrong shape.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        debug!("ignoring malformed field value: {e}");
        T::default()
    }))
}

/// Deserialize a list, dropping the entries that do not parse. Anything other
/// than a list reads as an empty one.
pub fn skip_malformed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("skipping malformed list entry: {e}");
                None
            }
        })
        .collect())
}

/// Deserialize a map, dropping the entries whose value does not parse.
/// Anything other than an object reads as an empty map.
pub fn skip_malformed_entries<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(IndexMap::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(parsed) => Some((key, parsed)),
            Err(e) => {
                debug!("skipping malformed entry `{key}`: {e}");
                None
            }
        })
        .collect())
}

/// A present `tags` key. `null` and non-list values read as an empty list and
/// non-string entries are dropped, so only an absent key yields `None`.
pub fn tag_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|tag| match tag {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(Some(tags))
}
