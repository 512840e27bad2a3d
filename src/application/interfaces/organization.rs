use crate::application::context::RequestContext;
use crate::error::AppError;
use crate::model::responses::OrganizationList;
use crate::presentation::Organization;
use async_trait::async_trait;

/// Interface for the organization service
#[async_trait]
pub trait OrganizationService: Send + Sync {
    /// Creates an organization
    async fn create_organization(
        &self,
        ctx: &RequestContext,
        orgname: &str,
        company: &str,
    ) -> Result<Organization, AppError>;

    /// Gets one page of the organizations the logged in user belongs to
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the request
    /// * `page_size` - Number of organizations per page, e.g. [`DEFAULT_PAGE_SIZE`](crate::constants::DEFAULT_PAGE_SIZE)
    async fn get_organizations(
        &self,
        ctx: &RequestContext,
        page_size: u32,
    ) -> Result<OrganizationList, AppError>;
}
