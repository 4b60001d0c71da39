use std::time::Duration;

use url::Url;

use super::error::ConfigError;

const BASE_URL: &str = "STOREFRONT_BASE_URL";
const TIMEOUT_SECS: &str = "STOREFRONT_HTTP_TIMEOUT_SECS";

/// Location of the product API.
#[derive(Debug, Clone)]
pub struct CatalogApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl CatalogApiConfig {
    /// Load the API configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_BASE_URL: API base URL (required)
    /// - STOREFRONT_HTTP_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup(BASE_URL).ok_or(ConfigError::Missing(BASE_URL))?;
        let base_url =
            Url::parse(raw_url.trim()).map_err(|e| ConfigError::invalid(BASE_URL, &raw_url, e))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::invalid(
                BASE_URL,
                &raw_url,
                "URL cannot carry a path",
            ));
        }

        let timeout = match lookup(TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| ConfigError::invalid(TIMEOUT_SECS, &raw, e))?,
            None => http_client::DEFAULT_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn should_read_base_url_with_default_timeout() {
        // Arrange
        let vars = lookup(&[("STOREFRONT_BASE_URL", "https://api.shop.example")]);

        // Act
        let config = CatalogApiConfig::from_lookup(vars).unwrap();

        // Assert
        assert_eq!(config.base_url.as_str(), "https://api.shop.example/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_read_custom_timeout() {
        let vars = lookup(&[
            ("STOREFRONT_BASE_URL", "http://localhost:4000"),
            ("STOREFRONT_HTTP_TIMEOUT_SECS", "5"),
        ]);

        let config = CatalogApiConfig::from_lookup(vars).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn should_fail_when_base_url_is_missing() {
        let result = CatalogApiConfig::from_lookup(lookup(&[]));

        assert!(matches!(
            result,
            Err(ConfigError::Missing("STOREFRONT_BASE_URL"))
        ));
    }

    #[test]
    fn should_fail_on_unparseable_values() {
        let bad_url = CatalogApiConfig::from_lookup(lookup(&[("STOREFRONT_BASE_URL", "not a url")]));
        let bad_timeout = CatalogApiConfig::from_lookup(lookup(&[
            ("STOREFRONT_BASE_URL", "http://localhost:4000"),
            ("STOREFRONT_HTTP_TIMEOUT_SECS", "soon"),
        ]));

        assert!(matches!(bad_url, Err(ConfigError::Invalid { .. })));
        assert!(matches!(bad_timeout, Err(ConfigError::Invalid { .. })));
    }
}
