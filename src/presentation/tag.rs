use crate::presentation::deserialize_null_as_default;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Platform specific image behind a tag
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TagImage {
    /// CPU architecture, e.g. `amd64`
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub architecture: String,
    /// Platform features
    pub features: Option<String>,
    /// CPU variant, e.g. `v8`
    pub variant: Option<String>,
    /// Content digest of the image manifest
    pub digest: Option<String>,
    /// Operating system, e.g. `linux`
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub os: String,
    /// Operating system features
    pub os_features: Option<String>,
    /// Operating system version
    pub os_version: Option<String>,
    /// Compressed size in bytes
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub size: u64,
    /// Image status, e.g. `active`
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub status: String,
    /// Last time the image was pulled
    pub last_pulled: Option<DateTime<Utc>>,
    /// Last time the image was pushed
    pub last_pushed: Option<DateTime<Utc>>,
}

/// Tag of a repository
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Tag {
    /// Identifier of the user that created the tag
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub creator: u64,
    /// Unique identifier of the tag
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub id: u64,
    /// Legacy image identifier
    pub image_id: Option<String>,
    /// Images published under this tag, one per platform
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub images: Vec<TagImage>,
    /// Last update of the tag
    pub last_updated: Option<DateTime<Utc>>,
    /// Identifier of the user that last updated the tag
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub last_updater: u64,
    /// Username of the user that last updated the tag
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub last_updater_username: String,
    /// Tag name, e.g. `latest`
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Identifier of the repository the tag belongs to
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub repository: u64,
    /// Sum of the image sizes in bytes
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub full_size: u64,
    /// Whether the tag was pushed through the v2 registry API
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub v2: bool,
    /// Tag status, e.g. `active`
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub tag_status: String,
    /// Last time the tag was pulled
    pub tag_last_pulled: Option<DateTime<Utc>>,
    /// Last time the tag was pushed
    pub tag_last_pushed: Option<DateTime<Utc>>,
}
