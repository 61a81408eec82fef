//! Error types for executing GraphQL requests.
//!
//! - [`TransportError`]: the request never produced an HTTP response
//! - [`ClientError`]: unified error for [`GraphqlClient::execute`](crate::clients::GraphqlClient::execute)
//!
//! # Example
//!
//! ```rust,ignore
//! use heb_graphql::clients::ClientError;
//!
//! match client.execute(&document).await {
//!     Ok(envelope) => println!("{}", envelope.as_value()),
//!     Err(ClientError::Http { status, body }) => println!("status {status}: {body}"),
//!     Err(ClientError::Decode(e)) => println!("bad JSON: {e}"),
//!     Err(ClientError::Transport(e)) => println!("network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request fails below the HTTP layer.
///
/// Covers DNS failures, refused connections, TLS errors and timeouts.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    /// Human-readable description of the failure.
    pub message: String,
    /// The underlying error, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error with only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("request timed out: {error}")
        } else if error.is_connect() {
            format!("connection failed: {error}")
        } else {
            error.to_string()
        };
        Self {
            message,
            source: Some(Box::new(error)),
        }
    }
}

/// Unified error type for GraphQL request execution.
///
/// Requests are attempted exactly once; every failure surfaces immediately.
/// GraphQL-level errors returned with status 200 are not client errors: they
/// stay in the [`GraphqlEnvelope`](crate::clients::GraphqlEnvelope).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The endpoint answered with a status other than 200.
    #[error("Request failed with status code {status}: {body}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A 200 response whose body is not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}
