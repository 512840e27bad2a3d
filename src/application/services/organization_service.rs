use crate::application::context::RequestContext;
use crate::application::services::OrganizationService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::CreateOrganizationRequest;
use crate::model::responses::OrganizationList;
use crate::presentation::Organization;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the organization service
pub struct OrganizationServiceImpl {
    client: Arc<HttpClient>,
}

impl OrganizationServiceImpl {
    /// Creates a new instance of the organization service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrganizationService for OrganizationServiceImpl {
    async fn create_organization(
        &self,
        ctx: &RequestContext,
        orgname: &str,
        company: &str,
    ) -> Result<Organization, AppError> {
        info!("Creating organization {}", orgname);

        let body = CreateOrganizationRequest::new(orgname, company);
        let organization: Organization = self.client.post(ctx, "/orgs/", &body).await?;

        debug!("Organization created: {}", organization.orgname);
        Ok(organization)
    }

    async fn get_organizations(
        &self,
        ctx: &RequestContext,
        page_size: u32,
    ) -> Result<OrganizationList, AppError> {
        let path = format!("/user/orgs/?page_size={page_size}");
        debug!("Getting organizations");

        let result: OrganizationList = self.client.get(ctx, &path).await?;

        debug!(
            "Organizations obtained: {} of {}",
            result.results.len(),
            result.count
        );
        Ok(result)
    }
}
