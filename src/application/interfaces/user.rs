use crate::application::context::RequestContext;
use crate::error::AppError;
use crate::presentation::User;
use async_trait::async_trait;

/// Interface for the user service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets the profile of the logged in user
    async fn get_logged_in_user(&self, ctx: &RequestContext) -> Result<User, AppError>;
}
