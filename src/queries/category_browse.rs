//! The `CategoryBrowse` query.

use serde_json::{Map, Value};

use crate::queries::{CategoryBrowseParams, GraphqlDocument};

/// Operation name of the category browse query.
pub const OPERATION_NAME: &str = "CategoryBrowse";

/// Builds the `browseCategory` query.
///
/// The category id is passed as the `$categoryId` variable. The store id,
/// shopping context and limit are inlined as literals.
///
/// # Example
///
/// ```rust
/// use heb_graphql::queries::{build_category_browse_query, CategoryBrowseParams};
///
/// let document = build_category_browse_query(&CategoryBrowseParams::default());
///
/// assert!(document.query().contains("storeId: 590"));
/// assert!(document.query().contains("shoppingContext: CURBSIDE_PICKUP"));
/// assert_eq!(document.variables()["categoryId"], "490113");
/// ```
#[must_use]
pub fn build_category_browse_query(params: &CategoryBrowseParams) -> GraphqlDocument {
    let query = format!(
        r"
        query {OPERATION_NAME}($categoryId: String!) {{
          browseCategory(
            categoryId: $categoryId
            storeId: {store_id}
            shoppingContext: {shopping_context}
            limit: {limit}
          ) {{
            pageTitle
            records {{
              id
              displayName
              minimumOrderQuantity
              maximumOrderQuantity
              productImageUrls {{
                size
                url
              }}
              bestAvailable
              onAd
              isNew
              isComboLoco
              deal
              pricedByWeight
              brand {{
                name
                isOwnBrand
              }}
              SKUs {{
                id
                contextPrices {{
                  context
                  isOnSale
                  unitListPrice {{
                    unit
                    formattedAmount
                  }}
                  priceType
                  listPrice {{
                    unit
                    formattedAmount
                  }}
                  salePrice {{
                    formattedAmount
                  }}
                }}
                productAvailability
                skuPrice {{
                  listPrice {{
                    displayName
                  }}
                }}
              }}
            }}
            total
            hasMoreRecords
            nextCursor
            previousCursor
          }}
        }}
        ",
        store_id = params.store_id(),
        shopping_context = params.shopping_context(),
        limit = params.limit(),
    );

    let mut variables = Map::new();
    variables.insert(
        "categoryId".to_string(),
        Value::String(params.category_id().to_string()),
    );

    GraphqlDocument::new(OPERATION_NAME, &query, variables)
}
