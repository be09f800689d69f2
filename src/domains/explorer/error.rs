//! Explorer-specific error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the upstream explorer API.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("request to explorer {outcome}: {0}", outcome = transport_outcome(.0))]
    Transport(#[source] reqwest::Error),

    /// The explorer answered with a non-success status.
    #[error("explorer returned {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    /// A success response whose body is not valid JSON.
    #[error("invalid JSON in explorer response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Tool arguments could not be bound to the endpoint.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid explorer URL: {0}")]
    InvalidUrl(String),

    /// The shared client was released during shutdown.
    #[error("explorer client has been shut down")]
    Closed,
}

impl ExplorerError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "invalid URL" error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Upstream status code, if the failure came from an HTTP response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn transport_outcome(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() { "timed out" } else { "failed" }
}
