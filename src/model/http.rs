/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::context::RequestContext;
use crate::constants::AUTH_SCHEME;
use crate::error::AppError;
use reqwest::Client as HttpInternalClient;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, USER_AGENT};
use reqwest::{Method, Request, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

/// Successful response of a single API exchange
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status, always within 200..=299
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Decoded body, `None` when the server sent an empty body
    pub body: Option<T>,
}

impl<T: Default> ApiResponse<T> {
    /// Returns the decoded body, or the default value when the body was empty
    pub fn into_body_or_default(self) -> T {
        self.body.unwrap_or_default()
    }
}

/// Status, headers and raw bytes of a response that passed the status check
struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

/// Shared session for the Docker Hub API
///
/// Holds the base URL, the user agent, the `JWT` token obtained on login and
/// the transport. Every service builds its requests with [`HttpClient::new_request`]
/// and sends them with [`HttpClient::execute`], so the token set by a login is
/// carried by every later request.
///
/// The token is the only mutable state. Setting it while other tasks are building
/// requests is memory safe but last-write-wins: a request built concurrently with
/// a login may or may not carry the new token.
#[derive(Debug)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    base_url: Url,
    api_prefix: String,
    user_agent: String,
    auth_token: RwLock<Option<String>>,
}

impl HttpClient {
    /// Creates a session with a transport built from the configuration
    ///
    /// # Arguments
    /// * `config` - Base URL, API prefix, user agent and timeout to use
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Session without token
    /// * `Err(AppError)` - If the base URL is malformed or the transport cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Self::with_http_client(config, http_client)
    }

    /// Creates a session around an injected transport
    ///
    /// The transport's own timeout and connection pool settings are used as-is.
    pub fn with_http_client(
        config: &Config,
        http_client: HttpInternalClient,
    ) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.rest_api.base_url)?;
        Ok(Self {
            http_client,
            base_url,
            api_prefix: config.rest_api.api_prefix.clone(),
            user_agent: config.user_agent.clone(),
            auth_token: RwLock::new(None),
        })
    }

    /// Base URL every request path is resolved against
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// User agent sent with every request
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sets the token sent as `Authorization: JWT <token>` with every later request.
    /// An empty token clears it.
    pub fn set_auth_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut guard = self
            .auth_token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = if token.is_empty() { None } else { Some(token) };
    }

    /// Removes the token; later requests are unauthenticated
    pub fn clear_auth_token(&self) {
        let mut guard = self
            .auth_token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Current token, if a login succeeded
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.auth_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a token is currently set
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Resolves a path relative to the versioned API root
    ///
    /// # Arguments
    /// * `path` - Path such as `/repositories/library/ubuntu/`
    pub fn resolve(&self, path: &str) -> Result<Url, AppError> {
        Ok(self.base_url.join(&format!("{}{}", self.api_prefix, path))?)
    }

    /// Builds a request against the API
    ///
    /// The body, when present, is sent as JSON with `Content-Type: application/json`.
    /// `User-Agent` is always set; `Authorization` only when a token is present.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the versioned API root
    /// * `body` - Optional body to serialize
    ///
    /// # Returns
    /// * `Ok(Request)` - Fully addressed request, not sent yet
    /// * `Err(AppError::MalformedUrl)` - If the path cannot be joined onto the base URL
    /// * `Err(AppError::Serialization)` - If the body cannot be encoded
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, AppError> {
        self.build_request(method, path, body, self.auth_token())
    }

    /// Builds a request that never carries `Authorization`, whatever the session holds
    pub fn new_anonymous_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, AppError> {
        self.build_request(method, path, body, None)
    }

    fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<String>,
    ) -> Result<Request, AppError> {
        let url = self.resolve(path)?;

        let mut builder = self
            .http_client
            .request(method, url)
            .header(USER_AGENT, &self.user_agent);

        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("{AUTH_SCHEME} {token}"));
        }

        if let Some(body) = body {
            let payload =
                serde_json::to_vec(body).map_err(|e| AppError::Serialization(e.to_string()))?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(payload);
        }

        Ok(builder.build()?)
    }

    /// Sends a request and decodes the JSON body into `T`
    ///
    /// # Returns
    /// * `Ok(ApiResponse<T>)` - Status in 200..=299; `body` is `None` for an empty body
    /// * `Err(AppError::RequestFailed)` - Any other status; the body is not decoded
    /// * `Err(AppError::Cancelled | AppError::DeadlineExceeded)` - Context done first
    /// * `Err(AppError::Deserialization)` - Non-empty body that is not valid JSON for `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        request: Request,
    ) -> Result<ApiResponse<T>, AppError> {
        let raw = self.send(ctx, request).await?;
        let body = decode_body(&raw.body)?;
        Ok(ApiResponse {
            status: raw.status,
            headers: raw.headers,
            body,
        })
    }

    /// Sends a request whose response body carries nothing of interest
    pub async fn execute_empty(
        &self,
        ctx: &RequestContext,
        request: Request,
    ) -> Result<ApiResponse<()>, AppError> {
        let raw = self.send(ctx, request).await?;
        Ok(ApiResponse {
            status: raw.status,
            headers: raw.headers,
            body: None,
        })
    }

    /// Builds and sends a request in one step
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, AppError> {
        let request = self.new_request(method, path, body)?;
        self.execute(ctx, request).await
    }

    /// Makes a GET request, an empty body decodes as `T::default()`
    pub async fn get<T: DeserializeOwned + Default>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<T, AppError> {
        let response = self.request::<(), T>(ctx, Method::GET, path, None).await?;
        Ok(response.into_body_or_default())
    }

    /// Makes a POST request, an empty body decodes as `T::default()`
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.request(ctx, Method::POST, path, Some(body)).await?;
        Ok(response.into_body_or_default())
    }

    /// Makes a PATCH request, an empty body decodes as `T::default()`
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.request(ctx, Method::PATCH, path, Some(body)).await?;
        Ok(response.into_body_or_default())
    }

    /// Makes a request without decoding the response body
    pub async fn send_without_result<B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<StatusCode, AppError> {
        let request = self.new_request(method, path, body)?;
        let response = self.execute_empty(ctx, request).await?;
        Ok(response.status)
    }

    /// Sends the request racing the context, checks the status and reads the body
    async fn send(&self, ctx: &RequestContext, request: Request) -> Result<RawResponse, AppError> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }

        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}", method, url);

        let response: Response = tokio::select! {
            biased;
            err = ctx.done() => {
                warn!("{} {} abandoned: {}", method, url, err);
                return Err(err);
            }
            result = self.http_client.execute(request) => match result {
                Ok(response) => response,
                Err(e) => return Err(transport_error(ctx, e)),
            },
        };

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            error!("Request failed with status {}: {} {}", status, method, url);
            return Err(AppError::RequestFailed(status));
        }

        let headers = response.headers().clone();
        let body = tokio::select! {
            biased;
            err = ctx.done() => return Err(err),
            result = response.bytes() => match result {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => return Err(transport_error(ctx, e)),
            },
        };

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Maps a transport failure, giving precedence to the context when it is already done
fn transport_error(ctx: &RequestContext, e: reqwest::Error) -> AppError {
    if let Some(err) = ctx.err() {
        return err;
    }
    error!("Transport error: {}", e);
    AppError::Network(e)
}

/// Decodes a response body, treating an empty (or whitespace only) body as nothing to decode
///
/// # Arguments
/// * `body` - Raw response bytes
///
/// # Returns
/// * `Ok(None)` - Empty body
/// * `Ok(Some(T))` - Decoded value
/// * `Err(AppError::Deserialization)` - Malformed JSON
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| AppError::Deserialization(e.to_string()))
}
