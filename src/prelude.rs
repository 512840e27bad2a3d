/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Docker Hub Client Prelude
//!
//! Imports the types and traits needed for most Docker Hub API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use dockerhub_client::prelude::*;
//!
//! let config = Config::default();
//! let client = Client::new(config).unwrap();
//! let ctx = RequestContext::background();
//! assert!(!client.auth().is_logged_in());
//! # let _ = ctx;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Docker Hub API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, SESSION AND CONTEXT
// ============================================================================

/// Top level client
pub use crate::application::client::Client;

/// Cancellation and deadline context
pub use crate::application::context::RequestContext;

/// Shared session, request builder and executor
pub use crate::model::http::{ApiResponse, HttpClient};

// ============================================================================
// SERVICES (TRAITS AND IMPLEMENTATIONS)
// ============================================================================

pub use crate::application::services::{
    AuthService, AuthServiceImpl, OrganizationService, OrganizationServiceImpl,
    RepositoryService, RepositoryServiceImpl, TagService, TagServiceImpl, UserService,
    UserServiceImpl, WebhookService, WebhookServiceImpl,
};

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

pub use crate::model::requests::{
    CreateOrganizationRequest, CreateRepositoryRequest, LoginRequest, Privacy, RepositoryPatch,
    RepositoryPrivacyPatch, WebhookHookRequest, WebhookRequest,
};
pub use crate::model::responses::{
    LoginResponse, OrganizationList, Page, RepositoryList, TagList,
};

// ============================================================================
// RECORDS
// ============================================================================

pub use crate::presentation::{
    Organization, Repository, RepositoryPermissions, Tag, TagImage, User, Webhook, WebhookHook,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;
