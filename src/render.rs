//! Plain-text rendering of projected results for the console.
//!
//! Rendering is kept out of the projection layer: each report borrows a
//! projected value and implements [`Display`](fmt::Display).
//!
//! # Example
//!
//! ```rust
//! use heb_graphql::render::NoDataReport;
//!
//! assert_eq!(NoDataReport(&[]).to_string(), "No data found in the response\n");
//! ```

use std::fmt;

use crate::clients::GraphqlErrorMessage;
use crate::projection::{CategoryPage, ProductResult, StoreResult};

const SEPARATOR: &str = "--------------------------------------------------";

/// Lists stores found by a store search.
#[derive(Clone, Copy, Debug)]
pub struct StoresReport<'a>(pub &'a [StoreResult]);

impl fmt::Display for StoresReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} stores:", self.0.len())?;
        for result in self.0 {
            let store = &result.store;
            let address = &store.address;
            writeln!(f, "\n{SEPARATOR}")?;
            writeln!(f, "Store: {} (#{})", store.name, store.store_number)?;
            writeln!(
                f,
                "Address: {}, {}, {} {}",
                address.street_address, address.locality, address.region, address.postal_code
            )?;
            writeln!(f, "Distance: {:?} miles", result.distance_miles)?;
            writeln!(
                f,
                "Next Available Timeslot: {}",
                result.next_available_timeslot.as_deref().unwrap_or("None")
            )?;
        }
        Ok(())
    }
}

/// Summarizes a category page and lists its products.
#[derive(Clone, Copy, Debug)]
pub struct CategoryReport<'a>(pub &'a CategoryPage);

impl fmt::Display for CategoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;
        writeln!(
            f,
            "Category: {}",
            page.page_title.as_deref().unwrap_or("None")
        )?;
        writeln!(f, "Total products: {}", page.total)?;
        writeln!(f, "Has more records: {}", page.has_more_records)?;
        writeln!(f, "\nProducts:")?;
        for product in &page.records {
            write_product(f, product)?;
        }
        Ok(())
    }
}

fn write_product(f: &mut fmt::Formatter<'_>, product: &ProductResult) -> fmt::Result {
    writeln!(f, "\n{SEPARATOR}")?;
    writeln!(f, "Name: {}", product.display_name)?;
    if let Some(brand) = &product.brand {
        writeln!(f, "Brand: {}", brand.name)?;
    }
    writeln!(f, "ID: {}", product.id)?;

    if let Some(price) = &product.price {
        if let Some(list_price) = &price.list_price {
            writeln!(f, "Price: {list_price}")?;
        }
        if let Some(sale_price) = &price.sale_price {
            writeln!(f, "Sale Price: {sale_price}")?;
        }
    }

    if let Some(url) = product.image_urls.first() {
        writeln!(f, "Image URL: {url}")?;
    }

    writeln!(f, "On Ad: {}", product.on_ad)?;
    writeln!(f, "New: {}", product.is_new)
}

/// Reports an envelope that carried no data.
#[derive(Clone, Copy, Debug)]
pub struct NoDataReport<'a>(pub &'a [GraphqlErrorMessage]);

impl fmt::Display for NoDataReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "No data found in the response")?;
        for error in self.0 {
            writeln!(f, "  - {error}")?;
        }
        Ok(())
    }
}
