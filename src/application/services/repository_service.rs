use crate::application::context::RequestContext;
use crate::application::services::RepositoryService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{CreateRepositoryRequest, RepositoryPatch, RepositoryPrivacyPatch};
use crate::model::responses::RepositoryList;
use crate::presentation::Repository;
use crate::utils::path::{escape_segment, repository_path};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the repository service
pub struct RepositoryServiceImpl {
    client: Arc<HttpClient>,
}

impl RepositoryServiceImpl {
    /// Creates a new instance of the repository service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepositoryService for RepositoryServiceImpl {
    async fn create_repository(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        name: &str,
        description: &str,
        is_private: bool,
    ) -> Result<Repository, AppError> {
        info!("Creating repository {}/{}", namespace, name);

        let body = CreateRepositoryRequest::new(namespace, name, description, is_private);
        let repository: Repository = self.client.post(ctx, "/repositories/", &body).await?;

        debug!("Repository created: {}", repository.full_name());
        Ok(repository)
    }

    async fn edit_repository(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
        patch: &RepositoryPatch,
    ) -> Result<Repository, AppError> {
        info!("Editing repository {}/{}", namespace, repo);

        let path = repository_path(namespace, repo);
        self.client.patch(ctx, &path, patch).await
    }

    async fn get_repository(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
    ) -> Result<Repository, AppError> {
        debug!("Getting repository {}/{}", namespace, repo);

        let path = repository_path(namespace, repo);
        self.client.get(ctx, &path).await
    }

    async fn set_repository_privacy(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        repo: &str,
        is_private: bool,
    ) -> Result<(), AppError> {
        info!(
            "Setting repository {}/{} private={}",
            namespace, repo, is_private
        );

        let path = format!("{}privacy/", repository_path(namespace, repo));
        let body = RepositoryPrivacyPatch { is_private };
        self.client
            .send_without_result(ctx, Method::POST, &path, Some(&body))
            .await?;
        Ok(())
    }

    async fn get_repositories(
        &self,
        ctx: &RequestContext,
        namespace: &str,
    ) -> Result<RepositoryList, AppError> {
        let path = format!("/repositories/{}/", escape_segment(namespace));
        debug!("Getting repositories of {}", namespace);

        let result: RepositoryList = self.client.get(ctx, &path).await?;

        debug!(
            "Repositories obtained: {} of {}",
            result.results.len(),
            result.count
        );
        Ok(result)
    }
}
