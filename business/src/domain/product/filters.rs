use super::model::Product;
use super::value_objects::PriceRange;

/// The three client-side catalog filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    /// Empty means every category is allowed.
    pub categories: Vec<String>,
    pub price_range: PriceRange,
    pub min_rating: f64,
}

impl ProductFilters {
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.iter().any(|c| *c == product.category);

        category_ok
            && self.price_range.contains(product.price)
            && product.rating.rate >= self.min_rating
    }
}
