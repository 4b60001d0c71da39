//! Normalization of catalog API bodies into domain values.
//!
//! The list endpoint is expected to answer `{ "products": [...] }` and the
//! single-item endpoint `{ "product": {...} }`. Anything else never fails the
//! fetch: a body without a `products` array becomes an empty catalog, a body
//! without a decodable `product` becomes "no product", and list items that
//! are not product objects are dropped and counted.

use serde_json::Value;

use super::model::Product;

/// Decoded catalog plus the number of items that had to be dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub skipped: usize,
}

pub fn product_list(body: Value) -> ProductList {
    let Value::Object(mut fields) = body else {
        return ProductList::default();
    };

    let Some(Value::Array(items)) = fields.remove("products") else {
        return ProductList::default();
    };

    let mut list = ProductList::default();
    for item in items {
        match decode(item) {
            Some(product) => list.products.push(product),
            None => list.skipped += 1,
        }
    }
    list
}

pub fn single_product(body: Value) -> Option<Product> {
    let Value::Object(mut fields) = body else {
        return None;
    };

    fields.remove("product").and_then(decode)
}

fn decode(item: Value) -> Option<Product> {
    if !item.is_object() {
        return None;
    }
    serde_json::from_value::<Product>(item)
        .ok()
        .map(Product::with_resolved_id)
}
