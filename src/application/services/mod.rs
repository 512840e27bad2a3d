/// Module containing the authentication service
pub mod auth_service;
/// Module containing the organization service
pub mod organization_service;
/// Module containing the repository service
pub mod repository_service;
/// Module containing the tag service
pub mod tag_service;
/// Module containing the user service
pub mod user_service;
/// Module containing the webhook service
pub mod webhook_service;

pub use crate::application::interfaces::auth::*;
pub use crate::application::interfaces::organization::*;
pub use crate::application::interfaces::repository::*;
pub use crate::application::interfaces::tag::*;
pub use crate::application::interfaces::user::*;
pub use crate::application::interfaces::webhook::*;
pub use auth_service::AuthServiceImpl;
pub use organization_service::OrganizationServiceImpl;
pub use repository_service::RepositoryServiceImpl;
pub use tag_service::TagServiceImpl;
pub use user_service::UserServiceImpl;
pub use webhook_service::WebhookServiceImpl;
