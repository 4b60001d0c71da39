use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::state::fetch_product_failed;
use crate::domain::errors::CatalogError;
use crate::domain::http::{Endpoint, HttpClient};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::product::model::Product;
use crate::domain::product::normalize;
use crate::domain::product::use_cases::fetch_by_id::{
    FetchProductByIdParams, FetchProductByIdUseCase,
};

pub struct FetchProductByIdUseCaseImpl {
    pub http: Arc<dyn HttpClient>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl FetchProductByIdUseCaseImpl {
    async fn fetch(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        match self.http.get_json(&Endpoint::product(id)).await {
            Ok(body) => Ok(normalize::single_product(body)),
            Err(CatalogError::MalformedResponse(reason)) => {
                self.logger.warn(&format!(
                    "Product body for id {} is not JSON: {}",
                    id, reason
                ));
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl FetchProductByIdUseCase for FetchProductByIdUseCaseImpl {
    async fn execute(
        &self,
        params: FetchProductByIdParams,
    ) -> Result<Option<Product>, CatalogError> {
        self.logger
            .debug(&format!("Fetching product by id: {}", params.id));

        match self.fetch(&params.id).await {
            Ok(Some(product)) => {
                self.logger
                    .info(&format!("Fetched product {}", product.id));
                Ok(Some(product))
            }
            Ok(None) => {
                self.logger.warn(&format!(
                    "Product response for id {} carried no product",
                    params.id
                ));
                Ok(None)
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Product fetch failed for id {} [{}]: {}",
                    params.id,
                    e.code(),
                    e
                ));
                self.notifier.error(&fetch_product_failed(&params.id));
                Err(e)
            }
        }
    }
}
