pub mod department;
pub mod employee;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializer for PATCH fields that must distinguish "omitted" from
/// "explicitly null". Combined with `#[serde(default)]`, a missing key
/// stays `None`, `null` becomes `Some(None)`, and a value becomes
/// `Some(Some(value))`.
pub fn nullable_update<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
