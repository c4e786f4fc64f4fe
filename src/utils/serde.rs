use serde::{Deserialize, Deserializer};

/// Deserializes a field into `Option<Option<T>>` so PATCH payloads can tell
/// "field absent" (outer `None`, keep the current value) apart from
/// "field set to null" (`Some(None)`, clear the value).
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
