use crate::domain::product::{Product, ProductDraft, ProductId};
use crate::repository::api_error::{ApiError, ApiResult};
use crate::repository::product_repository::{
    HealthStatus, ProductRepository, SearchPage, SearchQuery,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
struct Inner {
    products: Vec<Product>,
    next_id: i64,
}

/// In-process stand-in for the REST backend. Behaves like the server:
/// assigns ids, stamps timestamps and answers missing ids with `NotFound`.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<Inner>>,
    offline: Arc<AtomicBool>,
    list_calls: Arc<AtomicUsize>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.0).max().unwrap_or(0);
        Self {
            inner: Arc::new(RwLock::new(Inner { products, next_id })),
            ..Default::default()
        }
    }

    /// While offline every call fails with `ApiError::Network`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of full-collection fetches served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_online(&self) -> ApiResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ApiError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ApiResult<Vec<Product>> {
        self.check_online()?;
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.inner.read().products.clone())
    }

    async fn get(&self, id: ProductId) -> ApiResult<Product> {
        self.check_online()?;
        self.inner
            .read()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create(&self, draft: &ProductDraft) -> ApiResult<Product> {
        self.check_online()?;
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let product = Product::from_draft(inner.next_id, draft.clone());
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> ApiResult<Product> {
        self.check_online()?;
        let mut inner = self.inner.write();
        let product = inner
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::NotFound)?;
        product.apply(draft.clone());
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> ApiResult<()> {
        self.check_online()?;
        let mut inner = self.inner.write();
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        if inner.products.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    async fn search(&self, query: &SearchQuery) -> ApiResult<SearchPage> {
        self.check_online()?;
        let needle = query.search.trim().to_lowercase();
        let matches: Vec<Product> = self
            .inner
            .read()
            .products
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        let total = matches.len();
        let offset = (query.page.saturating_sub(1) as usize) * query.limit as usize;
        let products = matches
            .into_iter()
            .skip(offset)
            .take(query.limit as usize)
            .collect();

        Ok(SearchPage {
            products,
            total,
            page: query.page,
            limit: query.limit,
        })
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.check_online()?;
        Ok(HealthStatus::ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64, stock: u32) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            stock,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::with_products(vec![Product::new(10, "Seed", 1.0, 1)]);

        let first = repo.create(&draft("Gula Pasir", 14_000.0, 20)).await.unwrap();
        let second = repo.create(&draft("Minyak Goreng", 18_000.0, 4)).await.unwrap();

        assert_eq!(first.id, ProductId(11));
        assert_eq!(second.id, ProductId(12));
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = InMemoryProductRepository::new();

        assert_eq!(repo.get(ProductId(1)).await.unwrap_err(), ApiError::NotFound);
        assert_eq!(repo.delete(ProductId(1)).await.unwrap_err(), ApiError::NotFound);
        assert_eq!(
            repo.update(ProductId(1), &draft("Nothing", 1.0, 0)).await.unwrap_err(),
            ApiError::NotFound
        );
    }

    #[tokio::test]
    async fn test_search_pages_results() {
        let repo = InMemoryProductRepository::new();
        for i in 0..7 {
            repo.create(&draft(&format!("Beras {}", i), 10_000.0, 1)).await.unwrap();
        }
        repo.create(&draft("Telur", 2_000.0, 30)).await.unwrap();

        let page = repo.search(&SearchQuery::new("beras").page(2).limit(5)).await.unwrap();
        assert_eq!(page.total, 7);
        assert_eq!(page.products.len(), 2);
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_offline_fails_every_call() {
        let repo = InMemoryProductRepository::new();
        repo.set_offline(true);

        assert!(matches!(repo.list().await, Err(ApiError::Network(_))));
        assert!(matches!(repo.health().await, Err(ApiError::Network(_))));
        assert_eq!(repo.list_calls(), 0);
    }
}
