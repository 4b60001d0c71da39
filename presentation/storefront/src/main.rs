use anyhow::Context;
use dotenvy::dotenv;

mod config;
mod setup;
mod view;

use business::application::catalog::store::CatalogStore;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;
use view::catalog_view::{render_catalog, render_selected};

/// Storefront console entry point
///
/// Loads configuration, wires the catalog store and renders the filtered
/// catalog. When a product id is passed as the first argument, that product
/// is fetched and shown as well.
///
/// Usage: `storefront [product-id]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG may come from .env
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    let product_id = std::env::args().nth(1);

    // 4. Wire dependencies
    let DependencyContainer {
        store,
        mut notifications,
    } = DependencyContainer::new(&config.catalog_api);

    let toasts = tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            eprintln!("[{}] {}", notification.level, notification.message);
        }
    });

    let mut updates = store.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let (loading, products) = {
                let state = updates.borrow_and_update();
                (state.loading, state.products.len())
            };
            tracing::debug!(loading, products, "catalog state changed");
        }
    });

    // 5. Run the views
    config.filters.apply(&store);
    let outcome = run(&store, product_id.as_deref()).await;

    // Dropping the store closes the notification channel so pending toasts flush.
    drop(store);
    toasts.await?;

    outcome
}

async fn run(store: &CatalogStore, product_id: Option<&str>) -> anyhow::Result<()> {
    let result = store.fetch_all_products().await;
    println!("{}", render_catalog(&store.snapshot()));
    result.context("failed to load the product catalog")?;

    if let Some(id) = product_id {
        let result = store.fetch_product_by_id(id).await;
        println!();
        println!("{}", render_selected(&store.snapshot()));
        result.with_context(|| format!("failed to load product {}", id))?;
    }

    Ok(())
}
