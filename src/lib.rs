/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Docker Hub Client
//!
//! A typed async client for the Docker Hub web API.
//!
//! The crate is split into:
//! - [`model::http`]: the shared session holding the base URL, the user agent,
//!   the `JWT` token and the transport, plus the request builder and executor
//!   every call goes through
//! - [`application::services`]: one service per API area (auth, organizations,
//!   repositories, tags, user, webhooks), each a thin layer composing a path and
//!   an optional body
//! - [`application::client::Client`]: the entry point owning the session and
//!   one instance of every service
//!
//! # Example
//! ```ignore
//! use dockerhub_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let ctx = RequestContext::with_timeout(std::time::Duration::from_secs(10));
//!
//! client.auth().login(&ctx, "username", "password").await?;
//! let repos = client.repositories().get_repositories(&ctx, "library").await?;
//! for repo in &repos.results {
//!     println!("{} ({} pulls)", repo.name, repo.pull_count);
//! }
//! ```

/// Services, interfaces, configuration and the top level client
pub mod application;
/// Constants shared across the crate
pub mod constants;
/// Error type returned by every fallible operation
pub mod error;
/// Request/response payloads and the HTTP session
pub mod model;
/// Convenient re-exports of the most used types
pub mod prelude;
/// Records returned by the Docker Hub API
pub mod presentation;
/// Environment, logging and path helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
