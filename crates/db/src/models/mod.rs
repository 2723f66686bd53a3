//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all fields optional) for partial updates

pub mod client;
pub mod document;
pub mod matter;

use serde::{Deserialize, Deserializer};

/// Deserializer for tri-state update fields on nullable columns.
///
/// An omitted field falls back to `#[serde(default)]` and stays `None`
/// (leave unchanged); a present field becomes `Some(inner)`, where an
/// explicit JSON `null` yields `Some(None)` (clear the column).
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
