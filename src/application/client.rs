/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Docker Hub API
//!
//! The client owns the shared session and one instance of every service.
//! Services are independent components holding the same session, so a login
//! through [`Client::auth`] authenticates every later call made through the
//! other services.
//!
//! # Example
//! ```ignore
//! use dockerhub_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let ctx = RequestContext::background();
//!
//! client.login_with_config(&ctx).await?;
//! let me = client.users().get_logged_in_user(&ctx).await?;
//! let tags = client.tags().get_tags(&ctx, &me.username, "app", 25).await?;
//! ```

use crate::application::config::Config;
use crate::application::context::RequestContext;
use crate::application::services::{
    AuthService, AuthServiceImpl, OrganizationServiceImpl, RepositoryServiceImpl, TagServiceImpl,
    UserServiceImpl, WebhookServiceImpl,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use reqwest::Client as HttpInternalClient;
use std::sync::Arc;
use tracing::{error, info};

/// Docker Hub API client
pub struct Client {
    config: Arc<Config>,
    http_client: Arc<HttpClient>,
    auth: AuthServiceImpl,
    organizations: OrganizationServiceImpl,
    repositories: RepositoryServiceImpl,
    tags: TagServiceImpl,
    users: UserServiceImpl,
    webhooks: WebhookServiceImpl,
}

impl Client {
    /// Creates a new unauthenticated client
    ///
    /// # Arguments
    /// * `config` - Base URL, user agent, timeout and optional credentials
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the base URL is malformed or the transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self::from_parts(config, http_client))
    }

    /// Creates a new unauthenticated client around an injected transport
    pub fn with_http_client(
        config: Config,
        http_client: HttpInternalClient,
    ) -> Result<Self, AppError> {
        let http_client = HttpClient::with_http_client(&config, http_client)?;
        Ok(Self::from_parts(config, http_client))
    }

    fn from_parts(config: Config, http_client: HttpClient) -> Self {
        let config = Arc::new(config);
        let http_client = Arc::new(http_client);
        Self {
            auth: AuthServiceImpl::new(http_client.clone()),
            organizations: OrganizationServiceImpl::new(http_client.clone()),
            repositories: RepositoryServiceImpl::new(http_client.clone()),
            tags: TagServiceImpl::new(http_client.clone()),
            users: UserServiceImpl::new(http_client.clone()),
            webhooks: WebhookServiceImpl::new(http_client.clone()),
            config,
            http_client,
        }
    }

    /// Logs in with the credentials of the configuration
    ///
    /// # Returns
    /// * `Ok(())` - Token stored on the session
    /// * `Err(AppError::InvalidInput)` - If the configuration carries no credentials
    /// * `Err(AppError)` - Any error of [`AuthService::login`]
    pub async fn login_with_config(&self, ctx: &RequestContext) -> Result<(), AppError> {
        let Some(credentials) = self.config.credentials.as_ref() else {
            error!("No credentials configured");
            return Err(AppError::InvalidInput(
                "no credentials configured".to_string(),
            ));
        };
        self.auth
            .login(ctx, &credentials.username, &credentials.password)
            .await?;
        info!("Logged in with configured credentials");
        Ok(())
    }

    /// Sets the token sent with every later request, e.g. one kept from a previous login
    pub fn set_auth_token(&self, token: impl Into<String>) {
        self.http_client.set_auth_token(token);
    }

    /// Authentication service
    pub fn auth(&self) -> &AuthServiceImpl {
        &self.auth
    }

    /// Organization service
    pub fn organizations(&self) -> &OrganizationServiceImpl {
        &self.organizations
    }

    /// Repository service
    pub fn repositories(&self) -> &RepositoryServiceImpl {
        &self.repositories
    }

    /// Tag service
    pub fn tags(&self) -> &TagServiceImpl {
        &self.tags
    }

    /// User service
    pub fn users(&self) -> &UserServiceImpl {
        &self.users
    }

    /// Webhook service
    pub fn webhooks(&self) -> &WebhookServiceImpl {
        &self.webhooks
    }

    /// Shared session used by every service
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}
