use crate::application::context::RequestContext;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the authentication service
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in with the given credentials and stores the issued token on the session
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the request
    /// * `username` - Docker Hub username
    /// * `password` - Docker Hub password or personal access token
    ///
    /// # Returns
    /// * `Ok(())` - Every later request carries `Authorization: JWT <token>`
    /// * `Err(AppError::Authentication)` - Success status without a token; the session is unchanged
    async fn login(
        &self,
        ctx: &RequestContext,
        username: &str,
        password: &str,
    ) -> Result<(), AppError>;

    /// Forgets the token locally, later requests are unauthenticated
    fn logout(&self);

    /// Whether a login succeeded and its token is still held
    fn is_logged_in(&self) -> bool;
}
