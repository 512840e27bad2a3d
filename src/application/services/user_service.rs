use crate::application::context::RequestContext;
use crate::application::services::UserService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::presentation::User;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the user service
pub struct UserServiceImpl {
    client: Arc<HttpClient>,
}

impl UserServiceImpl {
    /// Creates a new instance of the user service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn get_logged_in_user(&self, ctx: &RequestContext) -> Result<User, AppError> {
        debug!("Getting logged in user");
        let user: User = self.client.get(ctx, "/user/").await?;
        debug!("Logged in user: {}", user.username);
        Ok(user)
    }
}
