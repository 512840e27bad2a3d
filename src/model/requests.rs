/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_REPOSITORY_REGISTRY, DEFAULT_WEBHOOK_REGISTRY};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body of `POST /users/login/`
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Docker Hub username
    pub username: String,
    /// Docker Hub password or personal access token
    pub password: String,
}

impl LoginRequest {
    /// Builds a login body
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Password is masked in debug output.
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of `POST /orgs/`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateOrganizationRequest {
    /// Organization name
    pub orgname: String,
    /// Company name
    pub company: String,
}

impl CreateOrganizationRequest {
    /// Builds an organization body
    pub fn new(orgname: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            orgname: orgname.into(),
            company: company.into(),
        }
    }
}

/// Privacy mode sent when creating a repository
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    /// Visible to everyone
    #[default]
    Public,
    /// Visible to members only
    Private,
}

impl From<bool> for Privacy {
    fn from(is_private: bool) -> Self {
        if is_private {
            Privacy::Private
        } else {
            Privacy::Public
        }
    }
}

/// Body of `POST /repositories/`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateRepositoryRequest {
    /// Namespace the repository is created in
    pub namespace: String,
    /// Registry, always `docker`
    pub registry: String,
    /// Image reference, `namespace/name`
    pub image: String,
    /// Repository name
    pub name: String,
    /// Short description
    pub description: String,
    /// Privacy mode, derived from `is_private`
    pub privacy: Privacy,
    /// Automated build settings, never set by this client
    pub build_settings: Vec<serde_json::Value>,
    /// Whether the repository is private
    pub is_private: bool,
}

impl CreateRepositoryRequest {
    /// Builds a repository body for `namespace/name`
    ///
    /// `registry` is fixed to `docker`, `image` is `namespace/name` and `privacy`
    /// follows `is_private`.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        is_private: bool,
    ) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        Self {
            image: format!("{namespace}/{name}"),
            registry: DEFAULT_REPOSITORY_REGISTRY.to_string(),
            namespace,
            name,
            description: description.into(),
            privacy: Privacy::from(is_private),
            build_settings: Vec::new(),
            is_private,
        }
    }
}

/// Partial update sent with `PATCH /repositories/{namespace}/{repo}/`
///
/// Empty fields are left out of the JSON body, so an empty string means
/// "leave unchanged" and a field cannot be cleared through this patch.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct RepositoryPatch {
    /// Long description (markdown)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_description: String,
    /// Short description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl RepositoryPatch {
    /// Empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the long description
    pub fn with_full_description(mut self, full_description: impl Into<String>) -> Self {
        self.full_description = full_description.into();
        self
    }

    /// Set the short description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the patch would send `{}`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_description.is_empty() && self.description.is_empty()
    }
}

/// Body of `POST /repositories/{namespace}/{repo}/privacy/`
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryPrivacyPatch {
    /// New privacy flag
    pub is_private: bool,
}

/// Hook entry of a webhook pipeline body
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WebhookHookRequest {
    /// Hook name
    pub name: String,
    /// URL called on push
    pub hook_url: String,
}

/// Body of `POST /repositories/{namespace}/{repo}/webhook_pipeline/`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WebhookRequest {
    /// Pipeline name
    pub name: String,
    /// Always `false`
    pub expect_final_callback: bool,
    /// Hooks of the pipeline
    pub webhooks: Vec<WebhookHookRequest>,
    /// Registry host, always `registry-1.docker.io`
    pub registry: String,
}

impl WebhookRequest {
    /// Builds a pipeline named `name` with a single hook of the same name calling `hook_url`
    pub fn new(name: impl Into<String>, hook_url: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            webhooks: vec![WebhookHookRequest {
                name: name.clone(),
                hook_url: hook_url.into(),
            }],
            name,
            expect_final_callback: false,
            registry: DEFAULT_WEBHOOK_REGISTRY.to_string(),
        }
    }
}
