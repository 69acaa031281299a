//! Serde helper treating JSON `null` like an absent field.
//!
//! Use together with `#[serde(default)]`:
//!
//! ```ignore
//! #[serde(default, deserialize_with = "null_as_default")]
//! pub synopsis: String,
//! ```

use serde::{Deserialize, Deserializer};

pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
