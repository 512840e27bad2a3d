use crate::application::context::RequestContext;
use crate::application::services::TagService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::responses::TagList;
use crate::utils::path::repository_path;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the tag service
pub struct TagServiceImpl {
    client: Arc<HttpClient>,
}

impl TagServiceImpl {
    /// Creates a new instance of the tag service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TagService for TagServiceImpl {
    async fn get_tags(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
        page_size: u32,
    ) -> Result<TagList, AppError> {
        let path = format!(
            "{}tags/?page_size={page_size}&ordering=last_updated",
            repository_path(namespace, repo)
        );
        debug!("Getting tags of {}/{}", namespace, repo);

        let result: TagList = self.client.get(ctx, &path).await?;

        debug!("Tags obtained: {} of {}", result.results.len(), result.count);
        Ok(result)
    }
}
