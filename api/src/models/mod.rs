//! Client-side views of backend resources.
//!
//! DESIGN
//! ======
//! These types are projections, not owned records: fields the backend may
//! omit default instead of failing the whole decode, and enum-like strings
//! carry an `Unknown` catch-all so new backend values do not break old clients.

pub mod article;
pub mod persona;
pub mod product;
pub mod schedule;
pub mod tool;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
