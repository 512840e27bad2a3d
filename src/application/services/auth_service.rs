use crate::application::context::RequestContext;
use crate::application::services::AuthService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::LoginRequest;
use crate::model::responses::LoginResponse;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, error, info};

const LOGIN_PATH: &str = "/users/login/";

/// Implementation of the authentication service
pub struct AuthServiceImpl {
    client: Arc<HttpClient>,
}

impl AuthServiceImpl {
    /// Creates a new instance of the authentication service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Gets the shared session
    pub fn client(&self) -> &Arc<HttpClient> {
        &self.client
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(
        &self,
        ctx: &RequestContext,
        username: &str,
        password: &str,
    ) -> Result<(), AppError> {
        info!("Logging in as {}", username);

        let body = LoginRequest::new(username, password);
        let request = self
            .client
            .new_anonymous_request(Method::POST, LOGIN_PATH, Some(&body))?;
        let response = self.client.execute::<LoginResponse>(ctx, request).await?;

        let token = match response.body {
            Some(LoginResponse { token }) if !token.is_empty() => token,
            _ => {
                error!("Login answered {} without a token", response.status);
                return Err(AppError::Authentication("did not receive token".to_string()));
            }
        };

        self.client.set_auth_token(token);
        debug!("Logged in as {}", username);
        Ok(())
    }

    fn logout(&self) {
        debug!("Clearing auth token");
        self.client.clear_auth_token();
    }

    fn is_logged_in(&self) -> bool {
        self.client.is_authenticated()
    }
}
