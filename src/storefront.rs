//! High-level storefront operations.
//!
//! [`HebStorefront`] chains the three stages of each operation: build the
//! query document, execute it, and project the envelope.

use crate::clients::{GraphqlClient, GraphqlEnvelope, ReqwestTransport, Transport};
use crate::config::HebConfig;
use crate::error::Error;
use crate::projection::{project_products, project_stores, CategoryPage, Projected, StoreResult};
use crate::queries::{
    build_category_browse_query, build_store_search_query, CategoryBrowseParams,
    StoreSearchParams,
};

/// The result of one storefront operation.
///
/// Carries the raw envelope, for persistence, alongside its projection.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationOutcome<T> {
    /// The decoded response, verbatim.
    pub envelope: GraphqlEnvelope,
    /// The projected result.
    pub result: Projected<T>,
}

/// Client for the two storefront operations.
///
/// # Example
///
/// ```rust,ignore
/// use heb_graphql::{HebConfig, HebStorefront};
/// use heb_graphql::queries::StoreSearchParams;
///
/// let storefront = HebStorefront::new(HebConfig::from_env()?)?;
/// let outcome = storefront.search_stores(&StoreSearchParams::default()).await?;
/// ```
#[derive(Debug)]
pub struct HebStorefront<T = ReqwestTransport> {
    client: GraphqlClient<T>,
}

impl HebStorefront<ReqwestTransport> {
    /// Creates a storefront client backed by `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the HTTP client cannot be built.
    pub fn new(config: HebConfig) -> Result<Self, Error> {
        Ok(Self {
            client: GraphqlClient::new(config)?,
        })
    }
}

impl<T: Transport> HebStorefront<T> {
    /// Wraps an existing GraphQL client.
    #[must_use]
    pub const fn from_client(client: GraphqlClient<T>) -> Self {
        Self { client }
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn client(&self) -> &GraphqlClient<T> {
        &self.client
    }

    /// Searches for stores near an address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the request fails, or
    /// [`Error::Projection`] if the response is malformed.
    pub async fn search_stores(
        &self,
        params: &StoreSearchParams,
    ) -> Result<OperationOutcome<Vec<StoreResult>>, Error> {
        tracing::info!(
            address = params.address(),
            radius_miles = params.radius_miles(),
            "Searching for stores"
        );
        let document = build_store_search_query(params);
        let envelope = self.client.execute(&document).await?;
        let result = project_stores(&envelope)?;
        Ok(OperationOutcome { envelope, result })
    }

    /// Browses one page of a product category.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the request fails, or
    /// [`Error::Projection`] if the response is malformed.
    pub async fn browse_category(
        &self,
        params: &CategoryBrowseParams,
    ) -> Result<OperationOutcome<CategoryPage>, Error> {
        tracing::info!(
            category_id = params.category_id(),
            store_id = params.store_id(),
            "Fetching category products"
        );
        let document = build_category_browse_query(params);
        let envelope = self.client.execute(&document).await?;
        let result = project_products(&envelope)?;
        Ok(OperationOutcome { envelope, result })
    }
}
