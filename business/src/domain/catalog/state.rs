use crate::domain::errors::CatalogError;
use crate::domain::product::filters::ProductFilters;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::PriceRange;

pub const FETCH_PRODUCTS_FAILED: &str = "Failed to fetch products";

/// Message used for both the state error and the notification of a failed
/// single-product fetch.
pub fn fetch_product_failed(id: &str) -> String {
    format!("Failed to fetch product with ID: {}", id)
}

/// Session state of the product catalog.
///
/// Consumers only ever see clones of this value; the transition methods are
/// crate-private and driven by `CatalogStore`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub selected_product: Option<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_categories: Vec<String>,
    pub price_range: PriceRange,
    pub min_rating: f64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            selected_product: None,
            loading: false,
            error: None,
            selected_categories: Vec::new(),
            price_range: PriceRange::default(),
            min_rating: 0.0,
        }
    }
}

impl CatalogState {
    pub fn filters(&self) -> ProductFilters {
        ProductFilters {
            categories: self.selected_categories.clone(),
            price_range: self.price_range,
            min_rating: self.min_rating,
        }
    }

    /// Products passing the current filters, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        let filters = self.filters();
        self.products.iter().filter(|p| filters.matches(p)).collect()
    }

    /// Distinct categories of the catalog, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    pub(crate) fn fetch_products_pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn fetch_products_fulfilled(&mut self, products: Vec<Product>) {
        self.loading = false;
        self.products = products;
    }

    pub(crate) fn fetch_products_rejected(&mut self, error: &CatalogError) {
        self.loading = false;
        let message = error.to_string();
        self.error = Some(if message.is_empty() {
            FETCH_PRODUCTS_FAILED.to_string()
        } else {
            message
        });
    }

    pub(crate) fn fetch_product_pending(&mut self) {
        self.loading = true;
        self.error = None;
        self.selected_product = None;
    }

    pub(crate) fn fetch_product_fulfilled(&mut self, product: Option<Product>) {
        self.loading = false;
        self.selected_product = product;
    }

    pub(crate) fn fetch_product_rejected(&mut self, id: &str, error: &CatalogError) {
        self.loading = false;
        self.selected_product = None;
        let message = error.to_string();
        self.error = Some(if message.is_empty() {
            fetch_product_failed(id)
        } else {
            format!("{}: {}", fetch_product_failed(id), message)
        });
    }

    pub(crate) fn set_selected_categories(&mut self, categories: Vec<String>) {
        self.selected_categories = categories;
    }

    pub(crate) fn set_price_range(&mut self, range: PriceRange) {
        self.price_range = range;
    }

    pub(crate) fn set_min_rating(&mut self, rating: f64) {
        self.min_rating = rating;
    }
}
