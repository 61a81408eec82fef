//! Typed, validated parameters for the storefront operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::queries::QueryError;

/// Default search address.
pub const DEFAULT_ADDRESS: &str = "1803 West Bronze St, Pharr, TX";
/// Default search radius in miles.
pub const DEFAULT_RADIUS_MILES: u32 = 25;
/// Default category to browse.
pub const DEFAULT_CATEGORY_ID: &str = "490113";
/// Default store to price products against.
pub const DEFAULT_STORE_ID: u32 = 590;
/// Default number of products per page.
pub const DEFAULT_LIMIT: u32 = 15;

/// The shopping context a category is browsed under.
///
/// Prices and availability are scoped to this context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShoppingContext {
    /// Order online, pick up at the store.
    #[default]
    CurbsidePickup,
    /// Order online, delivered to the customer.
    CurbsideDelivery,
    /// In-store shopping.
    ExploreMyStore,
}

impl ShoppingContext {
    /// Returns the GraphQL enum value for this context.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurbsidePickup => "CURBSIDE_PICKUP",
            Self::CurbsideDelivery => "CURBSIDE_DELIVERY",
            Self::ExploreMyStore => "EXPLORE_MY_STORE",
        }
    }
}

impl fmt::Display for ShoppingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShoppingContext {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CURBSIDE_PICKUP" => Ok(Self::CurbsidePickup),
            "CURBSIDE_DELIVERY" => Ok(Self::CurbsideDelivery),
            "EXPLORE_MY_STORE" => Ok(Self::ExploreMyStore),
            _ => Err(QueryError::invalid(
                "shoppingContext",
                format!(
                    "unknown shopping context '{s}'; expected CURBSIDE_PICKUP, CURBSIDE_DELIVERY or EXPLORE_MY_STORE"
                ),
            )),
        }
    }
}

/// Parameters for `searchStoresByAddress`.
///
/// # Example
///
/// ```rust
/// use heb_graphql::queries::StoreSearchParams;
///
/// let params = StoreSearchParams::new(
///     "1803 West Bronze St, Pharr, TX",
///     25,
///     vec!["CURBSIDE_PICKUP".to_string()],
/// )
/// .unwrap();
/// assert_eq!(params.radius_miles(), 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreSearchParams {
    address: String,
    radius_miles: u32,
    fulfillment_channels: Vec<String>,
}

impl StoreSearchParams {
    /// Creates validated store search parameters.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidParameter`] if the address is blank or
    /// contains a double quote or control character, if the radius is zero,
    /// or if a fulfillment channel is not a GraphQL enum name.
    pub fn new(
        address: impl Into<String>,
        radius_miles: u32,
        fulfillment_channels: Vec<String>,
    ) -> Result<Self, QueryError> {
        let address = address.into();
        validate_text("address", &address)?;
        validate_positive("radiusMiles", radius_miles)?;
        for channel in &fulfillment_channels {
            validate_enum_name("fulfillmentChannels", channel)?;
        }

        Ok(Self {
            address,
            radius_miles,
            fulfillment_channels,
        })
    }

    /// Returns the address to search near.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the search radius in miles.
    #[must_use]
    pub const fn radius_miles(&self) -> u32 {
        self.radius_miles
    }

    /// Returns the fulfillment channels, in the order given.
    #[must_use]
    pub fn fulfillment_channels(&self) -> &[String] {
        &self.fulfillment_channels
    }
}

impl Default for StoreSearchParams {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            radius_miles: DEFAULT_RADIUS_MILES,
            fulfillment_channels: Vec::new(),
        }
    }
}

/// Parameters for `browseCategory`.
///
/// # Example
///
/// ```rust
/// use heb_graphql::queries::{CategoryBrowseParams, ShoppingContext};
///
/// let params = CategoryBrowseParams::new("490113", 590, ShoppingContext::CurbsidePickup, 15)
///     .unwrap();
/// assert_eq!(params.category_id(), "490113");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryBrowseParams {
    category_id: String,
    store_id: u32,
    shopping_context: ShoppingContext,
    limit: u32,
}

impl CategoryBrowseParams {
    /// Creates validated category browse parameters.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidParameter`] if the category id is blank or
    /// contains a double quote or control character, or if the store id or
    /// limit is zero.
    pub fn new(
        category_id: impl Into<String>,
        store_id: u32,
        shopping_context: ShoppingContext,
        limit: u32,
    ) -> Result<Self, QueryError> {
        let category_id = category_id.into();
        validate_text("categoryId", &category_id)?;
        validate_positive("storeId", store_id)?;
        validate_positive("limit", limit)?;

        Ok(Self {
            category_id,
            store_id,
            shopping_context,
            limit,
        })
    }

    /// Returns the category id.
    #[must_use]
    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    /// Returns the store id.
    #[must_use]
    pub const fn store_id(&self) -> u32 {
        self.store_id
    }

    /// Returns the shopping context.
    #[must_use]
    pub const fn shopping_context(&self) -> ShoppingContext {
        self.shopping_context
    }

    /// Returns the maximum number of products to return.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for CategoryBrowseParams {
    fn default() -> Self {
        Self {
            category_id: DEFAULT_CATEGORY_ID.to_string(),
            store_id: DEFAULT_STORE_ID,
            shopping_context: ShoppingContext::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

fn validate_text(name: &'static str, value: &str) -> Result<(), QueryError> {
    if value.trim().is_empty() {
        return Err(QueryError::invalid(name, "must not be empty"));
    }
    if value.contains('"') {
        return Err(QueryError::invalid(name, "must not contain a double quote"));
    }
    if value.chars().any(char::is_control) {
        return Err(QueryError::invalid(
            name,
            "must not contain newlines or other control characters",
        ));
    }
    Ok(())
}

fn validate_positive(name: &'static str, value: u32) -> Result<(), QueryError> {
    if value == 0 {
        return Err(QueryError::invalid(name, "must be greater than zero"));
    }
    Ok(())
}

/// Accepts GraphQL names: `[_A-Za-z][_0-9A-Za-z]*`.
fn validate_enum_name(name: &'static str, value: &str) -> Result<(), QueryError> {
    let mut chars = value.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric());
    if valid {
        Ok(())
    } else {
        Err(QueryError::invalid(
            name,
            format!("'{value}' is not a valid GraphQL enum value"),
        ))
    }
}
