use serde::{Deserialize, Serialize};

/// Aggregate review score of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A catalog item as served by the product API.
///
/// Missing fields decode to their defaults; the API is trusted for shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    /// Document key of the backing store, sent as `_id`.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Fills an empty `id` from `_id`, when the payload only carries the latter.
    pub fn with_resolved_id(mut self) -> Self {
        if self.id.is_empty() {
            if let Some(object_id) = &self.object_id {
                self.id = object_id.clone();
            }
        }
        self
    }
}
