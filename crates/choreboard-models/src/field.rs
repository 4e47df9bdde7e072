//! Serde helpers for optional caller-defined fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a field that is present in the input, including an explicit
/// `null`, as `Some`.
///
/// Pair with `#[serde(default)]` so a missing key stays `None`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
