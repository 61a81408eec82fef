//! Projection of GraphQL envelopes into stable result types.
//!
//! # Overview
//!
//! - [`project_stores`]: envelope -> [`StoreResult`]s
//! - [`project_products`]: envelope -> [`CategoryPage`]
//! - [`Projected`]: either the projected value or the soft `NoData` outcome
//! - [`ProjectionError`]: a required field is missing or mistyped
//!
//! # Field Access Policy
//!
//! An envelope without `data` (or with `data: null`) projects to
//! [`Projected::NoData`]. Once `data` is present the shape is checked
//! strictly: a missing required field fails with
//! [`ProjectionError::MalformedResponse`] naming the field's path, while
//! documented optional fields may be absent or `null`.

mod errors;
mod node;
mod products;
mod stores;

use serde::Serialize;

use crate::clients::{GraphqlEnvelope, GraphqlErrorMessage};

pub use errors::ProjectionError;
pub use products::{project_products, Brand, CategoryPage, ContextPrice, ProductResult, UnitPrice};
pub use stores::{project_stores, Store, StoreAddress, StoreResult};

/// The outcome of projecting an envelope.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Projected<T> {
    /// The envelope carried data and it was projected.
    Found(T),
    /// The envelope carried no `data`. Holds the GraphQL errors, if any.
    NoData {
        /// Errors reported by the endpoint.
        errors: Vec<GraphqlErrorMessage>,
    },
}

impl<T> Projected<T> {
    fn no_data(envelope: &GraphqlEnvelope) -> Self {
        let errors = envelope.errors();
        tracing::warn!(error_count = errors.len(), "No data found in the response");
        Self::NoData { errors }
    }

    /// Returns the projected value, or `None` for `NoData`.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NoData { .. } => None,
        }
    }

    /// Returns `true` for the `NoData` outcome.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}
