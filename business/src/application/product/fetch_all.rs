use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::state::FETCH_PRODUCTS_FAILED;
use crate::domain::errors::CatalogError;
use crate::domain::http::{Endpoint, HttpClient};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::product::model::Product;
use crate::domain::product::normalize;
use crate::domain::product::use_cases::fetch_all::FetchAllProductsUseCase;

pub struct FetchAllProductsUseCaseImpl {
    pub http: Arc<dyn HttpClient>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl FetchAllProductsUseCaseImpl {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let body = match self.http.get_json(&Endpoint::product_list()).await {
            Ok(body) => body,
            Err(CatalogError::MalformedResponse(reason)) => {
                self.logger.warn(&format!(
                    "Product catalog body is not JSON, treating as empty: {}",
                    reason
                ));
                serde_json::Value::Null
            }
            Err(e) => return Err(e),
        };

        let list = normalize::product_list(body);
        if list.skipped > 0 {
            self.logger.warn(&format!(
                "Skipped {} catalog entries that are not products",
                list.skipped
            ));
        }
        Ok(list.products)
    }
}

#[async_trait]
impl FetchAllProductsUseCase for FetchAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.debug("Fetching product catalog");

        match self.fetch().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Fetched {} products", products.len()));
                Ok(products)
            }
            Err(e) => {
                self.logger
                    .error(&format!("Product catalog fetch failed [{}]: {}", e.code(), e));
                self.notifier.error(FETCH_PRODUCTS_FAILED);
                Err(e)
            }
        }
    }
}
