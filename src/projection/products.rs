//! Projection of `browseCategory` responses.

use serde::Serialize;

use crate::clients::GraphqlEnvelope;
use crate::projection::node::Node;
use crate::projection::{Projected, ProjectionError};

/// One page of a category listing.
///
/// `next_cursor` and `previous_cursor` are surfaced as data only; no
/// follow-up request is ever made with them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    /// Category title.
    pub page_title: Option<String>,
    /// Total number of products in the category.
    pub total: u64,
    /// Whether more products exist beyond this page.
    pub has_more_records: bool,
    /// Cursor of the next page.
    pub next_cursor: Option<String>,
    /// Cursor of the previous page.
    pub previous_cursor: Option<String>,
    /// Products on this page.
    pub records: Vec<ProductResult>,
}

/// A product in a category listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResult {
    /// Product identifier.
    pub id: String,
    /// Name shown to shoppers.
    pub display_name: String,
    /// Brand, when the API reports one.
    pub brand: Option<Brand>,
    /// Image URLs in the order the API lists them.
    pub image_urls: Vec<String>,
    /// The first SKU's first context price.
    pub price: Option<ContextPrice>,
    /// Featured in the weekly ad.
    pub on_ad: bool,
    /// Recently added to the catalog.
    pub is_new: bool,
    /// Part of a promotional deal.
    pub deal: bool,
    /// Sold by weight rather than by unit.
    pub priced_by_weight: bool,
    /// Smallest quantity that can be ordered.
    pub minimum_order_quantity: Option<u64>,
    /// Largest quantity that can be ordered.
    pub maximum_order_quantity: Option<u64>,
}

/// Product brand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Brand name.
    pub name: String,
    /// Whether this is a store brand.
    pub is_own_brand: bool,
}

/// A price scoped to one shopping context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextPrice {
    /// Shopping context the price applies to, e.g. `CURBSIDE`.
    pub context: Option<String>,
    /// How the price is computed, e.g. `AVERAGE_WEIGHT`.
    pub price_type: Option<String>,
    /// Formatted list price, e.g. `$1.98`.
    pub list_price: Option<String>,
    /// Formatted sale price. Only present while the product is on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    /// List price per unit of measure.
    pub unit_list_price: Option<UnitPrice>,
}

/// Price per unit of measure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPrice {
    /// Unit of measure, e.g. `lb`.
    pub unit: Option<String>,
    /// Formatted amount, e.g. `$1.98`.
    pub formatted_amount: Option<String>,
}

/// Extracts a category page from a category browse response.
///
/// # Errors
///
/// Returns [`ProjectionError::MalformedResponse`] if a required field is
/// missing or mistyped. Images, SKUs, context prices and the brand are
/// optional.
pub fn project_products(
    envelope: &GraphqlEnvelope,
) -> Result<Projected<CategoryPage>, ProjectionError> {
    let Some(data) = envelope.data() else {
        return Ok(Projected::no_data(envelope));
    };

    let category = Node::new(data, "data").require("browseCategory")?;

    let records = category
        .require("records")?
        .items()?
        .iter()
        .map(project_product)
        .collect::<Result<Vec<_>, _>>()?;

    let page = CategoryPage {
        page_title: category.optional_str("pageTitle")?.map(str::to_string),
        total: category.require("total")?.as_u64()?,
        has_more_records: category.require("hasMoreRecords")?.as_bool()?,
        next_cursor: category.get("nextCursor").map(|c| c.to_text()),
        previous_cursor: category.get("previousCursor").map(|c| c.to_text()),
        records,
    };

    tracing::debug!(
        count = page.records.len(),
        total = page.total,
        "Projected category page"
    );
    Ok(Projected::Found(page))
}

fn project_product(record: &Node<'_>) -> Result<ProductResult, ProjectionError> {
    let brand = record
        .get("brand")
        .map(|brand| -> Result<Brand, ProjectionError> {
            Ok(Brand {
                name: brand.require_str("name")?.to_string(),
                is_own_brand: brand.optional_bool("isOwnBrand")?.unwrap_or(false),
            })
        })
        .transpose()?;

    let mut image_urls = Vec::new();
    for image in record.optional_items("productImageUrls")? {
        if let Some(url) = image.optional_str("url")? {
            image_urls.push(url.to_string());
        }
    }

    let price = match record.optional_items("SKUs")?.first() {
        Some(sku) => sku
            .optional_items("contextPrices")?
            .first()
            .map(project_price)
            .transpose()?,
        None => None,
    };

    Ok(ProductResult {
        id: record.require("id")?.as_id()?,
        display_name: record.require_str("displayName")?.to_string(),
        brand,
        image_urls,
        price,
        on_ad: record.require("onAd")?.as_bool()?,
        is_new: record.require("isNew")?.as_bool()?,
        deal: record.optional_bool("deal")?.unwrap_or(false),
        priced_by_weight: record.optional_bool("pricedByWeight")?.unwrap_or(false),
        minimum_order_quantity: record.optional_u64("minimumOrderQuantity")?,
        maximum_order_quantity: record.optional_u64("maximumOrderQuantity")?,
    })
}

fn project_price(price: &Node<'_>) -> Result<ContextPrice, ProjectionError> {
    let formatted = |key: &str| -> Result<Option<String>, ProjectionError> {
        Ok(match price.get(key) {
            Some(amount) => amount.optional_str("formattedAmount")?.map(str::to_string),
            None => None,
        })
    };

    let is_on_sale = price.optional_bool("isOnSale")?.unwrap_or(false);
    let sale_price = if is_on_sale {
        formatted("salePrice")?
    } else {
        None
    };

    let unit_list_price = price
        .get("unitListPrice")
        .map(|unit| -> Result<UnitPrice, ProjectionError> {
            Ok(UnitPrice {
                unit: unit.get("unit").map(|u| u.to_text()),
                formatted_amount: unit.optional_str("formattedAmount")?.map(str::to_string),
            })
        })
        .transpose()?;

    Ok(ContextPrice {
        context: price.get("context").map(|c| c.to_text()),
        price_type: price.get("priceType").map(|p| p.to_text()),
        list_price: formatted("listPrice")?,
        sale_price,
        unit_list_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn product_json(context_prices: Value) -> Value {
        json!({
            "id": "1234567",
            "displayName": "H-E-B Organics Gala Apples",
            "minimumOrderQuantity": 1,
            "maximumOrderQuantity": 10,
            "productImageUrls": [
                {"size": "SMALL", "url": "https://images.heb.com/small.jpg"},
                {"size": "LARGE", "url": "https://images.heb.com/large.jpg"}
            ],
            "bestAvailable": false,
            "onAd": true,
            "isNew": false,
            "isComboLoco": false,
            "deal": false,
            "pricedByWeight": true,
            "brand": {"name": "H-E-B Organics", "isOwnBrand": true},
            "SKUs": [{
                "id": "9876",
                "contextPrices": context_prices,
                "productAvailability": ["IN_STORE"],
                "skuPrice": {"listPrice": {"displayName": "$1.98"}}
            }]
        })
    }

    fn envelope_with(records: Vec<Value>) -> GraphqlEnvelope {
        GraphqlEnvelope::new(json!({
            "data": {
                "browseCategory": {
                    "pageTitle": "Fruit",
                    "records": records,
                    "total": 120,
                    "hasMoreRecords": true,
                    "nextCursor": "abc",
                    "previousCursor": null
                }
            }
        }))
    }

    fn curbside_price(is_on_sale: bool) -> Value {
        json!([{
            "context": "CURBSIDE",
            "isOnSale": is_on_sale,
            "unitListPrice": {"unit": "lb", "formattedAmount": "$1.98"},
            "priceType": "AVERAGE_WEIGHT",
            "listPrice": {"unit": "each", "formattedAmount": "$2.50"},
            "salePrice": {"formattedAmount": "$2.00"}
        }])
    }

    #[test]
    fn test_projects_page_and_product_fields() {
        let envelope = envelope_with(vec![product_json(curbside_price(true))]);

        let page = project_products(&envelope).unwrap().found().unwrap();
        assert_eq!(page.page_title.as_deref(), Some("Fruit"));
        assert_eq!(page.total, 120);
        assert!(page.has_more_records);
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
        assert_eq!(page.previous_cursor, None);

        let product = &page.records[0];
        assert_eq!(product.id, "1234567");
        assert_eq!(product.brand.as_ref().unwrap().name, "H-E-B Organics");
        assert_eq!(product.image_urls.len(), 2);
        assert!(product.on_ad);
        assert!(!product.is_new);
        assert!(!product.deal);
        assert!(product.priced_by_weight);

        let price = product.price.as_ref().unwrap();
        assert_eq!(price.list_price.as_deref(), Some("$2.50"));
        assert_eq!(price.sale_price.as_deref(), Some("$2.00"));
        assert_eq!(
            price.unit_list_price.as_ref().unwrap().formatted_amount.as_deref(),
            Some("$1.98")
        );
    }

    #[test]
    fn test_empty_records_is_not_an_error() {
        let page = project_products(&envelope_with(vec![]))
            .unwrap()
            .found()
            .unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.total, 120);
        assert!(page.has_more_records);
    }

    #[test]
    fn test_sale_price_omitted_when_not_on_sale() {
        let envelope = envelope_with(vec![product_json(curbside_price(false))]);
        let page = project_products(&envelope).unwrap().found().unwrap();

        let price = page.records[0].price.as_ref().unwrap();
        assert_eq!(price.sale_price, None);

        let serialized = serde_json::to_value(price).unwrap();
        assert!(serialized.get("salePrice").is_none());
        assert_eq!(serialized["listPrice"], "$2.50");
    }

    #[test]
    fn test_on_sale_without_sale_amount_has_no_sale_price() {
        let sale_prices = [
            None,
            Some(Value::Null),
            Some(json!({})),
            Some(json!({"formattedAmount": null})),
        ];

        for sale_price in sale_prices {
            let mut prices = curbside_price(true);
            let entry = prices[0].as_object_mut().unwrap();
            match sale_price {
                Some(value) => entry.insert("salePrice".to_string(), value),
                None => entry.remove("salePrice"),
            };

            let envelope = envelope_with(vec![product_json(prices)]);
            let page = project_products(&envelope).unwrap().found().unwrap();
            let price = page.records[0].price.as_ref().unwrap();
            assert_eq!(price.sale_price, None);

            let serialized = serde_json::to_value(price).unwrap();
            assert!(serialized.get("salePrice").is_none());
        }
    }

    #[test]
    fn test_optional_pricing_and_images_may_be_absent() {
        let mut product = product_json(Value::Null);
        product["productImageUrls"] = Value::Null;
        product["brand"] = Value::Null;

        let page = project_products(&envelope_with(vec![product]))
            .unwrap()
            .found()
            .unwrap();
        let product = &page.records[0];
        assert!(product.price.is_none());
        assert!(product.image_urls.is_empty());
        assert!(product.brand.is_none());
    }

    #[test]
    fn test_empty_sku_list_has_no_price() {
        let mut product = product_json(curbside_price(true));
        product["SKUs"] = json!([]);

        let page = project_products(&envelope_with(vec![product]))
            .unwrap()
            .found()
            .unwrap();
        assert!(page.records[0].price.is_none());
    }

    #[test]
    fn test_only_first_context_price_is_used() {
        let prices = json!([
            {"isOnSale": false, "listPrice": {"formattedAmount": "$3.00"}},
            {"isOnSale": true, "listPrice": {"formattedAmount": "$1.00"}, "salePrice": {"formattedAmount": "$0.50"}}
        ]);
        let page = project_products(&envelope_with(vec![product_json(prices)]))
            .unwrap()
            .found()
            .unwrap();

        let price = page.records[0].price.as_ref().unwrap();
        assert_eq!(price.list_price.as_deref(), Some("$3.00"));
        assert_eq!(price.sale_price, None);
    }

    #[test]
    fn test_null_display_name_is_malformed() {
        let mut product = product_json(Value::Null);
        product["displayName"] = Value::Null;

        let error = project_products(&envelope_with(vec![product])).unwrap_err();
        assert_eq!(
            error,
            ProjectionError::malformed("data.browseCategory.records[0].displayName")
        );
    }

    #[test]
    fn test_missing_data_is_no_data() {
        let envelope = GraphqlEnvelope::new(json!({"data": null, "errors": []}));
        assert!(project_products(&envelope).unwrap().is_no_data());
    }
}
