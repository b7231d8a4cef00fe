use crate::domain::product::{Product, ProductId};
use crate::repository::{HealthStatus, ProductRepository, Repository, SearchPage, SearchQuery};
use crate::services::error_handling::{InventoryError, LogHelper};
use crate::services::query_cache::ProductCache;
use crate::services::refresh::{RefreshSignal, RefreshSubscription};
use crate::services::validation::ProductForm;
use std::sync::Arc;
use tracing::debug;

pub type ServiceResult<T> = std::result::Result<T, InventoryError>;

/// Product queries and mutations. Every successful mutation triggers the
/// refresh signal, which invalidates the cache and wakes subscribed screens.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    refresh: RefreshSignal,
    cache: Arc<ProductCache>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, refresh: RefreshSignal) -> Self {
        Self {
            repository,
            refresh,
            cache: Arc::new(ProductCache::new()),
        }
    }

    /// Service wired to the process-wide refresh signal.
    pub fn from_repository(repository: &Repository) -> Self {
        Self::new(repository.products.clone(), RefreshSignal::global().clone())
    }

    pub fn refresh_signal(&self) -> &RefreshSignal {
        &self.refresh
    }

    pub fn subscribe(&self) -> RefreshSubscription {
        self.refresh.subscribe()
    }

    pub async fn list(&self) -> ServiceResult<Vec<Product>> {
        let generation = self.refresh.generation();
        if let Some(products) = self.cache.collection(generation) {
            debug!(generation, count = products.len(), "Serving product list from cache");
            return Ok(products);
        }
        self.fetch_all(generation).await
    }

    /// Always hits the backend (pull-to-refresh).
    pub async fn refetch(&self) -> ServiceResult<Vec<Product>> {
        let generation = self.refresh.generation();
        self.fetch_all(generation).await
    }

    async fn fetch_all(&self, generation: u64) -> ServiceResult<Vec<Product>> {
        let products = self.repository.list().await?;
        self.cache.store_collection(products.clone(), generation);
        Ok(products)
    }

    pub async fn get(&self, id: ProductId) -> ServiceResult<Product> {
        let generation = self.refresh.generation();
        if let Some(product) = self.cache.product(id, generation) {
            return Ok(product);
        }

        let product = self
            .repository
            .get(id)
            .await
            .map_err(|e| InventoryError::for_product(id, e))?;
        self.cache.store_product(product.clone(), generation);
        Ok(product)
    }

    pub async fn create(&self, form: &ProductForm) -> ServiceResult<Product> {
        let draft = form.validate().map_err(|errors| {
            LogHelper::log_validation_failure(&errors);
            InventoryError::Validation(errors)
        })?;

        let result = self.repository.create(&draft).await;
        LogHelper::log_product_operation(
            "create",
            result.as_ref().ok().map(|p| p.id),
            result.is_ok(),
        );
        let product = result?;

        let generation = self.refresh.trigger();
        self.cache.store_product(product.clone(), generation);
        Ok(product)
    }

    pub async fn update(&self, id: ProductId, form: &ProductForm) -> ServiceResult<Product> {
        let draft = form.validate().map_err(|errors| {
            LogHelper::log_validation_failure(&errors);
            InventoryError::Validation(errors)
        })?;

        let result = self.repository.update(id, &draft).await;
        LogHelper::log_product_operation("update", Some(id), result.is_ok());
        let product = result.map_err(|e| InventoryError::for_product(id, e))?;

        let generation = self.refresh.trigger();
        self.cache.store_product(product.clone(), generation);
        Ok(product)
    }

    pub async fn delete(&self, id: ProductId) -> ServiceResult<()> {
        let result = self.repository.delete(id).await;
        LogHelper::log_product_operation("delete", Some(id), result.is_ok());
        result.map_err(|e| InventoryError::for_product(id, e))?;

        self.cache.evict(id);
        self.refresh.trigger();
        Ok(())
    }

    pub async fn search(&self, query: &SearchQuery) -> ServiceResult<SearchPage> {
        Ok(self.repository.search(query).await?)
    }

    pub async fn health(&self) -> ServiceResult<HealthStatus> {
        Ok(self.repository.health().await?)
    }
}
