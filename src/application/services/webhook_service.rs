use crate::application::context::RequestContext;
use crate::application::services::WebhookService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::WebhookRequest;
use crate::presentation::Webhook;
use crate::utils::path::repository_path;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the webhook service
pub struct WebhookServiceImpl {
    client: Arc<HttpClient>,
}

impl WebhookServiceImpl {
    /// Creates a new instance of the webhook service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn webhook_path(namespace: &str, repo: &str) -> String {
        format!("{}webhook_pipeline/", repository_path(namespace, repo))
    }
}

#[async_trait]
impl WebhookService for WebhookServiceImpl {
    async fn create_webhook(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
        name: &str,
        hook_url: &str,
    ) -> Result<Webhook, AppError> {
        info!("Creating webhook {} on {}/{}", name, namespace, repo);

        let path = Self::webhook_path(namespace, repo);
        let body = WebhookRequest::new(name, hook_url);
        let webhook: Webhook = self.client.post(ctx, &path, &body).await?;

        debug!("Webhook created: {}", webhook.slug);
        Ok(webhook)
    }

    async fn get_webhooks(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
    ) -> Result<Webhook, AppError> {
        debug!("Getting webhooks of {}/{}", namespace, repo);
        self.client
            .get(ctx, &Self::webhook_path(namespace, repo))
            .await
    }
}
