//! GraphQL query construction for the storefront operations.
//!
//! # Overview
//!
//! - [`StoreSearchParams`] / [`build_store_search_query`]: stores near an address
//! - [`CategoryBrowseParams`] / [`build_category_browse_query`]: products in a category
//! - [`GraphqlDocument`]: the compact query text plus its variables
//! - [`QueryError`]: parameter validation failures
//!
//! Parameters are validated when constructed, so the builders are infallible
//! and pure. Free-text values (the address and the category id) are sent as
//! GraphQL variables and never spliced into the query text.
//!
//! # Example
//!
//! ```rust
//! use heb_graphql::queries::{build_store_search_query, StoreSearchParams};
//!
//! let document = build_store_search_query(&StoreSearchParams::default());
//! assert!(!document.query().contains('\n'));
//! ```

mod category_browse;
mod document;
mod errors;
mod params;
mod store_search;

pub use category_browse::build_category_browse_query;
pub use document::{compact, GraphqlDocument};
pub use errors::QueryError;
pub use params::{
    CategoryBrowseParams, ShoppingContext, StoreSearchParams, DEFAULT_ADDRESS,
    DEFAULT_CATEGORY_ID, DEFAULT_LIMIT, DEFAULT_RADIUS_MILES, DEFAULT_STORE_ID,
};
pub use store_search::build_store_search_query;
