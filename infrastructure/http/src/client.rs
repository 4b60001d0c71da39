use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use business::domain::errors::CatalogError;
use business::domain::http::{Endpoint, HttpClient};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Catalog API client over reqwest.
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
}

impl ReqwestHttpClient {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Resolves an endpoint against the base URL, keeping any path prefix the
    /// base URL already has and percent-encoding each segment.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CatalogError::network(format!("Invalid base URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get_json(&self, endpoint: &Endpoint) -> Result<serde_json::Value, CatalogError> {
        let url = self.url_for(endpoint)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::http_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| CatalogError::malformed_response(e.to_string()))
    }
}
