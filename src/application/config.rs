use crate::constants::{
    DEFAULT_API_BASE_ENDPOINT, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS, USER_AGENT,
};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Docker Hub account credentials
pub struct Credentials {
    /// Docker Hub username
    pub username: String,
    /// Docker Hub password or personal access token
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Docker Hub API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// User agent sent with every request
    pub user_agent: String,
    /// Credentials used by `Client::login_with_config`, if any
    pub credentials: Option<Credentials>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Docker Hub REST API
    pub base_url: String,
    /// Versioned path prefix prepended to every request path
    pub api_prefix: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_BASE_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Fixed defaults, without reading the environment
impl Default for Config {
    fn default() -> Self {
        Self {
            rest_api: RestApiConfig::default(),
            user_agent: USER_AGENT.to_string(),
            credentials: None,
        }
    }
}

impl Config {
    /// Creates a configuration from the environment (and a `.env` file if present)
    ///
    /// Variables:
    /// * `DOCKERHUB_BASE_URL`, `DOCKERHUB_API_PREFIX`, `DOCKERHUB_TIMEOUT`
    /// * `DOCKERHUB_USER_AGENT`
    /// * `DOCKERHUB_USERNAME` and `DOCKERHUB_PASSWORD`, both required for credentials
    ///
    /// Missing variables fall back to the values of [`Config::default`].
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = match (
            get_env_or_none::<String>("DOCKERHUB_USERNAME"),
            get_env_or_none::<String>("DOCKERHUB_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => {
                debug!("DOCKERHUB_USERNAME/DOCKERHUB_PASSWORD not set, no credentials configured");
                None
            }
        };

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "DOCKERHUB_BASE_URL",
                    String::from(DEFAULT_API_BASE_URL),
                ),
                api_prefix: get_env_or_default(
                    "DOCKERHUB_API_PREFIX",
                    String::from(DEFAULT_API_BASE_ENDPOINT),
                ),
                timeout: get_env_or_default("DOCKERHUB_TIMEOUT", DEFAULT_TIMEOUT_SECONDS),
            },
            user_agent: get_env_or_default("DOCKERHUB_USER_AGENT", String::from(USER_AGENT)),
            credentials,
        }
    }

    /// Returns a copy pointing at another base URL, mostly useful against mock servers
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Returns a copy carrying the given credentials
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }
}
