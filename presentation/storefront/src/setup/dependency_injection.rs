use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use http_client::ReqwestHttpClient;
use logger::TracingLogger;
use notifier::{ChannelNotifier, Notification};

use business::application::catalog::store::CatalogStore;
use business::application::product::fetch_all::FetchAllProductsUseCaseImpl;
use business::application::product::fetch_by_id::FetchProductByIdUseCaseImpl;

use crate::config::catalog_api_config::CatalogApiConfig;

/// Session-wide wiring: the catalog store handed to every view, plus the
/// queue of toasts its operations raise.
pub struct DependencyContainer {
    pub store: Arc<CatalogStore>,
    pub notifications: UnboundedReceiver<Notification>,
}

impl DependencyContainer {
    pub fn new(config: &CatalogApiConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let (notifier, notifications) = ChannelNotifier::new();
        let notifier = Arc::new(notifier);

        // Infrastructure adapters
        let http = Arc::new(ReqwestHttpClient::new(
            config.base_url.clone(),
            config.timeout,
        ));

        // Product use cases
        let fetch_all_use_case = Arc::new(FetchAllProductsUseCaseImpl {
            http: http.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let fetch_by_id_use_case = Arc::new(FetchProductByIdUseCaseImpl {
            http,
            notifier,
            logger,
        });

        let store = Arc::new(CatalogStore::new(fetch_all_use_case, fetch_by_id_use_case));

        Self {
            store,
            notifications,
        }
    }
}
