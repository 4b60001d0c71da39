pub mod app_config;
pub mod catalog_api_config;
pub mod error;
pub mod filter_config;
