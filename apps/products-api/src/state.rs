//! Application state management

use axum_helpers::ApiKeyAuth;
use domain_products::{InMemoryProductRepository, ProductService};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: ProductService<InMemoryProductRepository>,
    pub auth: ApiKeyAuth,
}

impl AppState {
    /// State backed by the seeded in-memory store
    pub fn new(config: Config) -> Self {
        Self::with_repository(config, InMemoryProductRepository::seeded())
    }

    pub fn with_repository(config: Config, repository: InMemoryProductRepository) -> Self {
        let auth = ApiKeyAuth::from_config(&config.api_key);
        Self {
            config,
            products: ProductService::new(repository),
            auth,
        }
    }
}
