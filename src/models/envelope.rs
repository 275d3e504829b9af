//! Response envelope of the campus REST API.
//!
//! Payloads come as `{ success, data, message }` where `data` is either the
//! resource itself, a list, or a paginated page `{ data: [...], ... }`.
//! Bare bodies without an envelope are accepted as well.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Strip the envelope and return the list of items it carries.
pub fn unwrap_items(body: Value) -> AppResult<Vec<Value>> {
    let data = match body {
        Value::Object(mut map) if map.contains_key("success") => {
            let ok = map.get("success").and_then(Value::as_bool).unwrap_or(false);
            if !ok {
                let msg = map
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("request was not successful")
                    .to_string();
                return Err(AppError::Envelope(msg));
            }
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    Ok(into_list(data))
}

fn into_list(data: Value) -> Vec<Value> {
    match data {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(mut map) if map.contains_key("data") => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(single) => vec![single],
        },
        single => vec![single],
    }
}

/// Unwrap and deserialize every item into `T`.
pub fn parse_items<T: DeserializeOwned>(raw: &str) -> AppResult<Vec<T>> {
    let body: Value = serde_json::from_str(raw)?;
    unwrap_items(body)?
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(AppError::from))
        .collect()
}

/// Unwrap a single-resource payload (profile).
pub fn parse_single<T: DeserializeOwned>(raw: &str) -> AppResult<T> {
    parse_items::<T>(raw)?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Envelope("empty payload".to_string()))
}

/// Field deserializer treating an explicit `null` like a missing key.
/// Use together with `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text of a scalar field that may arrive as a string or a number.
pub fn value_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
