use async_trait::async_trait;

use crate::domain::errors::CatalogError;
use crate::domain::product::model::Product;

#[derive(Debug, Clone)]
pub struct FetchProductByIdParams {
    pub id: String,
}

/// Resolves to `None` when the API answers without a `product` field.
#[async_trait]
pub trait FetchProductByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: FetchProductByIdParams,
    ) -> Result<Option<Product>, CatalogError>;
}
