pub mod analysis;
pub mod interview;
pub mod listing;

use serde::{Deserialize, Deserializer};

/// Decodes a field that the backend may send as `null`, treating `null` like a
/// missing field. Pair with `#[serde(default)]` so absent fields work too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
