use async_trait::async_trait;

use crate::domain::errors::CatalogError;

const API_SEGMENTS: [&str; 3] = ["api", "product", "products"];

/// A catalog API resource, expressed as path segments relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
}

impl Endpoint {
    /// `GET {base}/api/product/products`
    pub fn product_list() -> Self {
        Self {
            segments: API_SEGMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// `GET {base}/api/product/products/{id}`
    pub fn product(id: &str) -> Self {
        let mut endpoint = Self::product_list();
        endpoint.segments.push(id.to_string());
        endpoint
    }

    /// Unescaped path segments; the adapter is responsible for encoding them.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Port for the remote catalog API.
///
/// Returns the parsed JSON body of a successful GET, or the failure kind.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get_json(&self, endpoint: &Endpoint) -> Result<serde_json::Value, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_product_list_endpoint() {
        let endpoint = Endpoint::product_list();
        assert_eq!(endpoint.segments(), ["api", "product", "products"]);
        assert_eq!(endpoint.to_string(), "/api/product/products");
    }

    #[test]
    fn should_append_id_as_single_segment() {
        let endpoint = Endpoint::product("a/b");
        assert_eq!(endpoint.segments().len(), 4);
        assert_eq!(endpoint.segments()[3], "a/b");
    }
}
