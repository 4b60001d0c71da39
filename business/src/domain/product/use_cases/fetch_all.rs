use async_trait::async_trait;

use crate::domain::errors::CatalogError;
use crate::domain::product::model::Product;

#[async_trait]
pub trait FetchAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError>;
}
