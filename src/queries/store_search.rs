//! The `StoreSearch` query.

use serde_json::{Map, Value};

use crate::queries::{GraphqlDocument, StoreSearchParams};

/// Operation name of the store search query.
pub const OPERATION_NAME: &str = "StoreSearch";

/// Builds the `searchStoresByAddress` query.
///
/// The address is passed as the `$address` variable. The radius and the
/// fulfillment channels are validated on construction and inlined as
/// literals; the channel list uses JSON array syntax.
///
/// # Example
///
/// ```rust
/// use heb_graphql::queries::{build_store_search_query, StoreSearchParams};
///
/// let params = StoreSearchParams::new("1803 West Bronze St, Pharr, TX", 25, vec![]).unwrap();
/// let document = build_store_search_query(&params);
///
/// assert!(document.query().contains("radiusMiles: 25"));
/// assert!(document.query().contains("fulfillmentChannels: []"));
/// assert_eq!(document.variables()["address"], "1803 West Bronze St, Pharr, TX");
/// ```
#[must_use]
pub fn build_store_search_query(params: &StoreSearchParams) -> GraphqlDocument {
    let channels = Value::from(params.fulfillment_channels().to_vec());
    let query = format!(
        r"
        query {OPERATION_NAME}($address: String!) {{
          searchStoresByAddress(
            address: $address
            radiusMiles: {radius}
            fulfillmentChannels: {channels}
          ) {{
            stores {{
              distanceMiles
              nextAvailableTimeslot {{
                timeslot
              }}
              store {{
                address {{
                  locality
                  postalCode
                  region
                  streetAddress
                }}
                name
                storeNumber
                __typename
              }}
              __typename
            }}
            __typename
          }}
        }}
        ",
        radius = params.radius_miles(),
    );

    let mut variables = Map::new();
    variables.insert(
        "address".to_string(),
        Value::String(params.address().to_string()),
    );

    GraphqlDocument::new(OPERATION_NAME, &query, variables)
}
