//! Error types for the H-E-B GraphQL client.
//!
//! Each layer owns its error type:
//!
//! - [`ConfigError`]: configuration and credential validation (this module)
//! - [`QueryError`](crate::queries::QueryError): invalid query parameters
//! - [`ClientError`](crate::clients::ClientError): transport, HTTP and decode failures
//! - [`ProjectionError`](crate::projection::ProjectionError): malformed responses
//! - [`PersistError`](crate::persist::PersistError): saving or loading envelopes
//!
//! [`Error`] unifies them for callers that drive a whole operation through
//! [`HebStorefront`](crate::HebStorefront).
//!
//! # Example
//!
//! ```rust
//! use heb_graphql::{ConfigError, SessionCookie};
//!
//! let result = SessionCookie::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySessionCookie)));
//! ```

use thiserror::Error;

use crate::clients::ClientError;
use crate::persist::PersistError;
use crate::projection::ProjectionError;
use crate::queries::QueryError;

/// Errors that can occur while building the client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Session cookie cannot be empty.
    #[error("Session cookie cannot be empty. Please provide the storefront session cookie string.")]
    EmptySessionCookie,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://www.heb.com/graphql').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A header value contains characters that cannot be sent over HTTP.
    #[error("Invalid value for header '{header}': header values must not contain control characters.")]
    InvalidHeaderValue {
        /// The name of the offending header.
        header: &'static str,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },
}

/// Unified error type for a complete storefront operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Query parameters are invalid.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The request could not be completed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response did not have the expected shape.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// The raw response could not be saved or loaded.
    #[error(transparent)]
    Persist(#[from] PersistError),
}
