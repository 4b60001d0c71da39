use std::sync::{Arc, Mutex};

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use business::application::catalog::store::CatalogStore;
use business::application::product::fetch_all::FetchAllProductsUseCaseImpl;
use business::application::product::fetch_by_id::FetchProductByIdUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::notifier::Notifier;
use http_client::{DEFAULT_TIMEOUT, ReqwestHttpClient};

struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn store_for(server: &MockServer, notifier: Arc<RecordingNotifier>) -> CatalogStore {
    let http = Arc::new(ReqwestHttpClient::new(
        Url::parse(&server.uri()).unwrap(),
        DEFAULT_TIMEOUT,
    ));
    let logger: Arc<dyn Logger> = Arc::new(SilentLogger);

    let fetch_all = Arc::new(FetchAllProductsUseCaseImpl {
        http: http.clone(),
        notifier: notifier.clone(),
        logger: logger.clone(),
    });
    let fetch_by_id = Arc::new(FetchProductByIdUseCaseImpl {
        http,
        notifier,
        logger,
    });
    CatalogStore::new(fetch_all, fetch_by_id)
}

#[tokio::test]
async fn should_settle_html_body_as_empty_catalog() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/product/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;
    let notifier = Arc::new(RecordingNotifier::default());
    let store = store_for(&mock_server, notifier.clone());

    let result = store.fetch_all_products().await;

    assert_eq!(result, Ok(vec![]));
    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert!(state.products.is_empty());
    assert!(notifier.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_keep_partial_products_from_the_api() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/product/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {
                    "id": "1",
                    "title": "Fjallraven Backpack",
                    "price": 109.95,
                    "category": "bags",
                    "rating": { "rate": 3.9, "count": 120 }
                },
                { "id": "2", "title": "Mens Cotton Jacket", "price": 55.99 }
            ]
        })))
        .mount(&mock_server)
        .await;
    let notifier = Arc::new(RecordingNotifier::default());
    let store = store_for(&mock_server, notifier.clone());

    let products = store.fetch_all_products().await.unwrap();

    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
    assert_eq!(products[1].rating.count, 0);
    assert_eq!(store.snapshot().products, products);
    assert!(notifier.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_settle_html_product_body_as_no_selection() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/product/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;
    let notifier = Arc::new(RecordingNotifier::default());
    let store = store_for(&mock_server, notifier.clone());

    let result = store.fetch_product_by_id("7").await;

    assert_eq!(result, Ok(None));
    let state = store.snapshot();
    assert_eq!(state.selected_product, None);
    assert_eq!(state.error, None);
    assert!(notifier.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_record_status_failure_in_state_and_toast() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/product/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let notifier = Arc::new(RecordingNotifier::default());
    let store = store_for(&mock_server, notifier.clone());

    let result = store.fetch_all_products().await;

    assert!(result.is_err());
    assert_eq!(
        store.snapshot().error.as_deref(),
        Some("Request failed with status code 500")
    );
    assert_eq!(
        *notifier.messages.lock().unwrap(),
        ["Failed to fetch products"]
    );
}
