use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Optional field where `null`, `""` and whitespace all mean absent.
/// HTML forms post empty inputs as `""`, which should read as a missing field.
pub(crate) fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
