//! # H-E-B GraphQL Client
//!
//! A Rust client for the H-E-B storefront GraphQL API. It locates stores
//! near an address and browses product categories, projecting the loosely
//! structured responses into validated result types.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated query parameters and query construction via [`queries`]
//! - A single-attempt GraphQL client over a pluggable [`Transport`]
//! - Strict, path-reporting response projection via [`projection`]
//! - Envelope persistence via [`persist`] and console reports via [`render`]
//! - [`HebStorefront`], which chains all three stages per operation
//!
//! ## Quick Start
//!
//! ```rust
//! use heb_graphql::{HebConfig, SessionCookie};
//! use heb_graphql::queries::{build_store_search_query, StoreSearchParams};
//!
//! let config = HebConfig::builder()
//!     .session_cookie(SessionCookie::new("sst=your-session-cookie").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let params = StoreSearchParams::new("1803 West Bronze St, Pharr, TX", 25, vec![]).unwrap();
//! let document = build_store_search_query(&params);
//! assert!(document.query().contains("radiusMiles: 25"));
//! ```
//!
//! ## Running an Operation
//!
//! ```rust,ignore
//! use heb_graphql::{HebConfig, HebStorefront, Projected};
//! use heb_graphql::queries::CategoryBrowseParams;
//! use heb_graphql::render::CategoryReport;
//!
//! let storefront = HebStorefront::new(HebConfig::from_env()?)?;
//! let outcome = storefront.browse_category(&CategoryBrowseParams::default()).await?;
//!
//! if let Projected::Found(page) = &outcome.result {
//!     print!("{}", CategoryReport(page));
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: parameters and newtypes validate on construction
//! - **No interpolation of free text**: addresses and category ids travel as GraphQL variables
//! - **Single attempt**: no retries, caching or pagination traversal
//! - **Thread-safe**: clients and configuration are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod persist;
pub mod projection;
pub mod queries;
pub mod render;
mod storefront;

// Re-export public types at crate root for convenience
pub use clients::{
    ClientError, GraphqlClient, GraphqlEnvelope, GraphqlErrorMessage, ReqwestTransport,
    Transport, TransportError, TransportRequest, TransportResponse,
};
pub use config::{EndpointUrl, HebConfig, HebConfigBuilder, SessionCookie};
pub use error::{ConfigError, Error};
pub use persist::{load_envelope, save_envelope, PersistError};
pub use projection::{CategoryPage, ProductResult, Projected, ProjectionError, StoreResult};
pub use queries::{CategoryBrowseParams, GraphqlDocument, QueryError, ShoppingContext, StoreSearchParams};
pub use storefront::{HebStorefront, OperationOutcome};
