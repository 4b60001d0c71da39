//! Session owner of the catalog state.
//!
//! Every fetch runs in three phases: the pending transition is applied before
//! the request is issued, then exactly one of the fulfilled/rejected
//! transitions once it settles. Each transition is a single `send_modify`, so
//! subscribers never observe a half-applied phase. Overlapping fetches are not
//! de-duplicated: whichever settles last determines the final state.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::catalog::state::CatalogState;
use crate::domain::errors::CatalogError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::fetch_all::FetchAllProductsUseCase;
use crate::domain::product::use_cases::fetch_by_id::{
    FetchProductByIdParams, FetchProductByIdUseCase,
};
use crate::domain::product::value_objects::PriceRange;

pub struct CatalogStore {
    state: watch::Sender<CatalogState>,
    fetch_all: Arc<dyn FetchAllProductsUseCase>,
    fetch_by_id: Arc<dyn FetchProductByIdUseCase>,
}

impl CatalogStore {
    pub fn new(
        fetch_all: Arc<dyn FetchAllProductsUseCase>,
        fetch_by_id: Arc<dyn FetchProductByIdUseCase>,
    ) -> Self {
        let (state, _) = watch::channel(CatalogState::default());
        Self {
            state,
            fetch_all,
            fetch_by_id,
        }
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    pub async fn fetch_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.state.send_modify(CatalogState::fetch_products_pending);

        match self.fetch_all.execute().await {
            Ok(products) => {
                self.state
                    .send_modify(|state| state.fetch_products_fulfilled(products.clone()));
                Ok(products)
            }
            Err(e) => {
                self.state
                    .send_modify(|state| state.fetch_products_rejected(&e));
                Err(e)
            }
        }
    }

    /// Fetches a single product into `selected_product`.
    ///
    /// Blank ids and the dot segments `.`/`..` (which URL resolution would
    /// collapse onto another endpoint) are refused up front and leave the
    /// state untouched.
    pub async fn fetch_product_by_id(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        if id.trim().is_empty() || id == "." || id == ".." {
            return Err(CatalogError::InvalidProductId);
        }

        self.state.send_modify(CatalogState::fetch_product_pending);

        let params = FetchProductByIdParams { id: id.to_string() };
        match self.fetch_by_id.execute(params).await {
            Ok(product) => {
                self.state
                    .send_modify(|state| state.fetch_product_fulfilled(product.clone()));
                Ok(product)
            }
            Err(e) => {
                self.state
                    .send_modify(|state| state.fetch_product_rejected(id, &e));
                Err(e)
            }
        }
    }

    pub fn set_selected_categories(&self, categories: Vec<String>) {
        self.state
            .send_modify(|state| state.set_selected_categories(categories));
    }

    pub fn set_price_range(&self, range: impl Into<PriceRange>) {
        let range = range.into();
        self.state.send_modify(|state| state.set_price_range(range));
    }

    pub fn set_min_rating(&self, rating: f64) {
        self.state.send_modify(|state| state.set_min_rating(rating));
    }
}
