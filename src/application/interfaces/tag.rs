use crate::application::context::RequestContext;
use crate::error::AppError;
use crate::model::responses::TagList;
use async_trait::async_trait;

/// Interface for the tag service
#[async_trait]
pub trait TagService: Send + Sync {
    /// Gets one page of tags of a repository, ordered by last update
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the request
    /// * `namespace` - User or organization owning the repository
    /// * `repo` - Repository name
    /// * `page_size` - Number of tags per page, e.g. [`DEFAULT_PAGE_SIZE`](crate::constants::DEFAULT_PAGE_SIZE)
    async fn get_tags(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
        page_size: u32,
    ) -> Result<TagList, AppError>;
}
