/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type shared by every part of the client.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Network or connection failure reported by the transport
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The request context was cancelled before the exchange completed
    #[error("request cancelled")]
    Cancelled,
    /// The request context deadline expired before the exchange completed
    #[error("deadline exceeded")]
    DeadlineExceeded,
    /// The request path could not be joined onto the base URL
    #[error("malformed url: {0}")]
    MalformedUrl(#[from] url::ParseError),
    /// The request body could not be encoded as JSON
    #[error("serialization error: {0}")]
    Serialization(String),
    /// The server answered with a status outside of 200..=299
    #[error("request failed with status {}", .0.as_u16())]
    RequestFailed(StatusCode),
    /// A successful response carried a body that is not valid JSON for the target
    #[error("deserialization error: {0}")]
    Deserialization(String),
    /// Login answered with success but without a usable token
    #[error("authentication error: {0}")]
    Authentication(String),
    /// Caller supplied something the client cannot use
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Raw JSON conversion failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns the HTTP status carried by a [`AppError::RequestFailed`] error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::RequestFailed(status) => Some(*status),
            _ => None,
        }
    }

    /// Whether the error comes from the request context rather than the network
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AppError::Cancelled | AppError::DeadlineExceeded)
    }
}
