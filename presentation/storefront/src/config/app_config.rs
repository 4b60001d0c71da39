use super::{
    catalog_api_config::CatalogApiConfig, error::ConfigError, filter_config::FilterConfig,
};

pub struct AppConfig {
    pub catalog_api: CatalogApiConfig,
    pub filters: FilterConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            catalog_api: CatalogApiConfig::from_env()?,
            filters: FilterConfig::from_env()?,
        })
    }
}
