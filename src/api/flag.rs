//! Loose boolean fields sent by HTML forms and scripts.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Truthiness of a JSON value: `null`, `false`, zero and the empty string
/// are false, everything else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `deserialize_with` adapter for [`is_truthy`] flags.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| is_truthy(&value))
}
