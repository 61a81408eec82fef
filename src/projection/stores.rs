//! Projection of `searchStoresByAddress` responses.

use serde::Serialize;

use crate::clients::GraphqlEnvelope;
use crate::projection::node::Node;
use crate::projection::{Projected, ProjectionError};

/// A store near the searched address.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResult {
    /// Distance from the searched address.
    pub distance_miles: f64,
    /// The next pickup or delivery slot, if the store offers one.
    pub next_available_timeslot: Option<String>,
    /// The store itself.
    pub store: Store,
}

/// Store identity and location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Display name.
    pub name: String,
    /// Store number, as sent by the API.
    pub store_number: String,
    /// Postal address.
    pub address: StoreAddress,
}

/// A store's postal address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAddress {
    /// Street line.
    pub street_address: String,
    /// City.
    pub locality: String,
    /// State.
    pub region: String,
    /// ZIP code.
    pub postal_code: String,
}

/// Extracts the stores from a store search response.
///
/// # Errors
///
/// Returns [`ProjectionError::MalformedResponse`] if a required field is
/// missing or mistyped. `nextAvailableTimeslot` is optional.
///
/// # Example
///
/// ```rust
/// use heb_graphql::clients::GraphqlEnvelope;
/// use heb_graphql::projection::{project_stores, Projected};
/// use serde_json::json;
///
/// let envelope = GraphqlEnvelope::new(json!({"errors": [{"message": "nope"}]}));
/// assert!(matches!(project_stores(&envelope), Ok(Projected::NoData { .. })));
/// ```
pub fn project_stores(
    envelope: &GraphqlEnvelope,
) -> Result<Projected<Vec<StoreResult>>, ProjectionError> {
    let Some(data) = envelope.data() else {
        return Ok(Projected::no_data(envelope));
    };

    let stores = Node::new(data, "data")
        .require("searchStoresByAddress")?
        .require("stores")?
        .items()?
        .iter()
        .map(project_store)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = stores.len(), "Projected store search results");
    Ok(Projected::Found(stores))
}

fn project_store(item: &Node<'_>) -> Result<StoreResult, ProjectionError> {
    let distance_miles = item.require("distanceMiles")?.as_f64()?;
    let next_available_timeslot = item
        .get("nextAvailableTimeslot")
        .and_then(|slot| {
            if slot.is_object() {
                slot.get("timeslot")
            } else {
                Some(slot)
            }
        })
        .map(|timeslot| timeslot.to_text())
        .filter(|timeslot| !timeslot.is_empty());

    let store = item.require("store")?;
    let address = store.require("address")?;

    Ok(StoreResult {
        distance_miles,
        next_available_timeslot,
        store: Store {
            name: store.require_str("name")?.to_string(),
            store_number: store.require("storeNumber")?.as_id()?,
            address: StoreAddress {
                street_address: address.require_str("streetAddress")?.to_string(),
                locality: address.require_str("locality")?.to_string(),
                region: address.require_str("region")?.to_string(),
                postal_code: address.require_str("postalCode")?.to_string(),
            },
        },
    })
}
