use crate::presentation::deserialize_null_as_default;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Docker Hub organization
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Organization {
    /// Unique identifier of the organization
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    /// Organization name, used as repository namespace
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub orgname: String,
    /// Display name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub full_name: String,
    /// Free-form location
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub location: String,
    /// Company name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub company: String,
    /// Public profile URL
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub profile_url: String,
    /// When the organization was created
    pub date_joined: Option<DateTime<Utc>>,
    /// Gravatar image URL
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub gravatar_url: String,
    /// Email used for the gravatar
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub gravatar_email: String,
    /// Account type as reported by the API, e.g. `Organization`
    #[serde(rename = "type")]
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub kind: String,
}
