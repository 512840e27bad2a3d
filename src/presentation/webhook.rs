use crate::presentation::deserialize_null_as_default;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Single hook of a webhook pipeline
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct WebhookHook {
    /// Hook name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// URL called on push
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub hook_url: String,
    /// When the hook was created
    pub created: Option<DateTime<Utc>>,
    /// Last change of the hook
    pub last_updated: Option<DateTime<Utc>>,
}

/// Webhook pipeline attached to a repository
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Webhook {
    /// Pipeline name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// URL-safe pipeline identifier
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub slug: String,
    /// Whether Docker Hub waits for a final callback
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub expect_final_callback: bool,
    /// Hooks called by the pipeline
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub webhooks: Vec<WebhookHook>,
    /// When the pipeline was created
    pub created: Option<DateTime<Utc>>,
    /// Last change of the pipeline
    pub last_updated: Option<DateTime<Utc>>,
}
