//! HTTP and GraphQL client types for the storefront API.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: sends a query document and returns the decoded envelope
//! - [`GraphqlEnvelope`]: the raw decoded response
//! - [`Transport`]: the `POST(url, headers, body) -> (status, body)` seam
//! - [`ReqwestTransport`]: the production [`Transport`]
//! - [`ClientError`]: transport, HTTP status, and decode failures
//!
//! # Retry Behavior
//!
//! There is none. Every request is attempted once and any failure is
//! returned to the caller unchanged.

mod errors;
pub mod graphql;
mod transport;

pub use errors::{ClientError, TransportError};
pub use graphql::{GraphqlClient, GraphqlEnvelope, GraphqlErrorMessage};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
