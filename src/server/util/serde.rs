use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
///
/// The content store returns `null` for array and object fields an editor
/// never touched, so `#[serde(default)]` alone is not enough.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
