use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an identifier written as a JSON string or any other scalar
///
/// Strings are kept verbatim, numbers and booleans become their JSON text.
/// `null` is rejected.
pub fn id_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Err(serde::de::Error::custom("id is null")),
        other => Ok(other.to_string()),
    }
}
