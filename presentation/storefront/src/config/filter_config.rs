use business::application::catalog::store::CatalogStore;
use business::domain::product::value_objects::{
    DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, PriceRange,
};

use super::error::ConfigError;

const CATEGORIES: &str = "STOREFRONT_CATEGORIES";
const MIN_PRICE: &str = "STOREFRONT_MIN_PRICE";
const MAX_PRICE: &str = "STOREFRONT_MAX_PRICE";
const MIN_RATING: &str = "STOREFRONT_MIN_RATING";

/// Initial catalog filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub categories: Vec<String>,
    pub price_range: PriceRange,
    pub min_rating: f64,
}

impl FilterConfig {
    /// Environment variables:
    /// - STOREFRONT_CATEGORIES: comma-separated categories (default: all)
    /// - STOREFRONT_MIN_PRICE / STOREFRONT_MAX_PRICE (default: 0 / 500)
    /// - STOREFRONT_MIN_RATING (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let categories = lookup(CATEGORIES)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let min = parse_number(&lookup, MIN_PRICE, DEFAULT_MIN_PRICE)?;
        let max = parse_number(&lookup, MAX_PRICE, DEFAULT_MAX_PRICE)?;
        let min_rating = parse_number(&lookup, MIN_RATING, 0.0)?;

        Ok(Self {
            categories,
            price_range: PriceRange::new(min, max),
            min_rating,
        })
    }

    /// Pushes the selection into the store through its filter setters.
    pub fn apply(&self, store: &CatalogStore) {
        store.set_selected_categories(self.categories.clone());
        store.set_price_range(self.price_range);
        store.set_min_rating(self.min_rating);
    }
}

fn parse_number(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: f64,
) -> Result<f64, ConfigError> {
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::invalid(name, &raw, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_unrestricted_filters() {
        let config = FilterConfig::from_lookup(|_| None).unwrap();

        assert!(config.categories.is_empty());
        assert_eq!(config.price_range, PriceRange::new(0.0, 500.0));
        assert_eq!(config.min_rating, 0.0);
    }

    #[test]
    fn should_split_categories_and_parse_bounds() {
        let config = FilterConfig::from_lookup(|name| match name {
            "STOREFRONT_CATEGORIES" => Some("electronics, jewelery,,".to_string()),
            "STOREFRONT_MAX_PRICE" => Some("120.5".to_string()),
            "STOREFRONT_MIN_RATING" => Some("3".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.categories, vec!["electronics", "jewelery"]);
        assert_eq!(config.price_range, PriceRange::new(0.0, 120.5));
        assert_eq!(config.min_rating, 3.0);
    }

    #[test]
    fn should_reject_non_numeric_rating() {
        let result = FilterConfig::from_lookup(|name| {
            (name == "STOREFRONT_MIN_RATING").then(|| "high".to_string())
        });

        assert!(matches!(result, Err(ConfigError::Invalid { name: "STOREFRONT_MIN_RATING", .. })));
    }
}
