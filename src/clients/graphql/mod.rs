//! GraphQL API client for the storefront endpoint.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: executes a [`GraphqlDocument`](crate::queries::GraphqlDocument)
//! - [`GraphqlEnvelope`]: the decoded response, kept verbatim
//! - [`GraphqlErrorMessage`]: one entry of the envelope's `errors` array
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: the query result data
//! - `errors`: any GraphQL errors (still HTTP 200)
//!
//! GraphQL errors are not client errors. They are logged and left in the
//! envelope for the projection layer to report.

mod client;
mod envelope;

pub use client::{GraphqlClient, CONTENT_TYPE};
pub use envelope::{GraphqlEnvelope, GraphqlErrorMessage};
