use crate::presentation::deserialize_null_as_default;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Permissions of the requesting user on a repository
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RepositoryPermissions {
    /// Can pull
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub read: bool,
    /// Can push
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub write: bool,
    /// Can change settings and collaborators
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub admin: bool,
}

/// Docker Hub repository
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Repository {
    /// Owner of the repository
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub user: String,
    /// Repository name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Namespace (user or organization) holding the repository
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub namespace: String,
    /// Repository type, e.g. `image`
    pub repository_type: Option<String>,
    /// Status code as reported by the API
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub status: i64,
    /// Short description
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub description: String,
    /// Whether the repository is private
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub is_private: bool,
    /// Whether the repository is built automatically
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub is_automated: bool,
    /// Whether the requesting user can edit the repository
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub can_edit: bool,
    /// Number of stars
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub star_count: u64,
    /// Number of pulls
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub pull_count: u64,
    /// Last push or settings change
    pub last_updated: Option<DateTime<Utc>>,
    /// Whether the repository was migrated from the legacy registry
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub is_migrated: bool,
    /// Whether the requesting user starred the repository
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub has_starred: bool,
    /// Long description (markdown)
    pub full_description: Option<String>,
    /// Relationship of the requesting user to the repository, e.g. `owner`
    pub affiliation: Option<String>,
    /// Permissions of the requesting user
    #[serde(rename = "repository_permissions", alias = "permissions")]
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub permissions: RepositoryPermissions,
}

impl Repository {
    /// `namespace/name`, the reference used by `docker pull`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}
