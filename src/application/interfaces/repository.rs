use crate::application::context::RequestContext;
use crate::error::AppError;
use crate::model::requests::RepositoryPatch;
use crate::model::responses::RepositoryList;
use crate::presentation::Repository;
use async_trait::async_trait;

/// Interface for the repository service
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Creates `namespace/name`
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the request
    /// * `namespace` - User or organization owning the repository
    /// * `name` - Repository name
    /// * `description` - Short description
    /// * `is_private` - Whether the repository is private
    async fn create_repository(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        name: &str,
        description: &str,
        is_private: bool,
    ) -> Result<Repository, AppError>;

    /// Updates the descriptions of a repository; empty patch fields are left unchanged
    async fn edit_repository(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
        patch: &RepositoryPatch,
    ) -> Result<Repository, AppError>;

    /// Gets details of a repository
    async fn get_repository(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
    ) -> Result<Repository, AppError>;

    /// Makes a repository private or public
    async fn set_repository_privacy(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
        is_private: bool,
    ) -> Result<(), AppError>;

    /// Gets the first page of repositories of a namespace
    async fn get_repositories(
        &self,
        ctx: &RequestContext,
        namespace: &str,
    ) -> Result<RepositoryList, AppError>;
}
