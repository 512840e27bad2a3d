/// Organization models
pub mod organization;
/// Repository models
pub mod repository;
/// Tag and tagged image models
pub mod tag;
/// User profile models
pub mod user;
/// Webhook pipeline models
pub mod webhook;

pub use organization::*;
pub use repository::*;
pub use tag::*;
pub use user::*;
pub use webhook::*;

use serde::Deserialize;

/// Helper function to deserialize null values as the field's default
pub(crate) fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
