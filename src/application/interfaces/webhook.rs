use crate::application::context::RequestContext;
use crate::error::AppError;
use crate::presentation::Webhook;
use async_trait::async_trait;

/// Interface for the webhook service
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// Creates a webhook pipeline with a single hook calling `hook_url`
    async fn create_webhook(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
        name: &str,
        hook_url: &str,
    ) -> Result<Webhook, AppError>;

    /// Gets the webhook pipeline of a repository
    async fn get_webhooks(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
    ) -> Result<Webhook, AppError>;
}
