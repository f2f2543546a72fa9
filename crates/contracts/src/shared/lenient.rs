//! Lenient field deserializers for backend payloads.
//!
//! The marketplace API is not consistent about scalar encodings: amounts may
//! arrive as numbers or numeric strings, identifiers as strings or integers,
//! and any of them may be `null`. These helpers accept all of those shapes and
//! collapse anything unusable to `None`, so a single odd row never fails the
//! whole response.
//!
//! Use together with `#[serde(default)]` so that missing fields also map to
//! `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number, numeric string or null -> `Option<f64>`.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Non-negative integer (or something that rounds to one) -> `Option<u64>`.
pub fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round() as u64))
}

/// String or number -> `Option<String>`; blank strings become `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}
