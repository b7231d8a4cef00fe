pub mod api_error;
pub mod http_product_repository;
pub mod memory_product_repository;
pub mod product_repository;

pub use api_error::{ApiError, ApiResult};
pub use http_product_repository::HttpProductRepository;
pub use memory_product_repository::InMemoryProductRepository;
pub use product_repository::{HealthStatus, ProductRepository, SearchPage, SearchQuery};

use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repository {
    pub products: Arc<dyn ProductRepository>,
}

impl Repository {
    pub fn new(products: impl ProductRepository + 'static) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    pub fn http(config: &AppConfig) -> ApiResult<Self> {
        Ok(Self::new(HttpProductRepository::from_config(config)?))
    }
}
