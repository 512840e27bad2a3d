use crate::presentation::deserialize_null_as_default;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Profile of the logged in user
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct User {
    /// Unique identifier of the user
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    /// Login name, also the user's namespace
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub username: String,
    /// Display name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub full_name: String,
    /// Free-form location
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub location: String,
    /// Company name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub company: String,
    /// Email used for the gravatar
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub gravatar_email: String,
    /// Whether the user is Docker staff
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub is_staff: bool,
    /// Whether the user is a Docker Hub admin
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub is_admin: bool,
    /// Public profile URL
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub profile_url: String,
    /// When the account was created
    pub date_joined: Option<DateTime<Utc>>,
    /// Gravatar image URL
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub gravatar_url: String,
    /// Account type as reported by the API, e.g. `User`
    #[serde(rename = "type")]
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub kind: String,
}
