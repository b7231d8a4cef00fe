use crate::domain::product::{Product, ProductId};
use crate::services::error_handling::{InventoryError, LogHelper, UserErrorFormatter};
use crate::services::product_service::ProductService;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            // The first load starts as soon as a screen mounts
            loading: true,
            refreshing: false,
            error: None,
        }
    }
}

/// Loading/refreshing/error state of the product collection for one screen.
#[derive(Clone)]
pub struct ProductsQuery {
    service: ProductService,
    state: Arc<RwLock<QueryState>>,
}

impl ProductsQuery {
    pub fn new(service: ProductService) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(QueryState::default())),
        }
    }

    pub fn snapshot(&self) -> QueryState {
        self.state.read().clone()
    }

    pub fn service(&self) -> &ProductService {
        &self.service
    }

    /// Mark the start of a load. Split from [`ProductsQuery::fetch`] so a UI
    /// can render the spinner before the request is in flight.
    pub fn begin(&self, show_refreshing: bool) {
        let mut state = self.state.write();
        if show_refreshing {
            state.refreshing = true;
        } else {
            state.loading = true;
        }
        state.error = None;
    }

    pub async fn fetch(&self, force: bool) {
        let result = if force {
            self.service.refetch().await
        } else {
            self.service.list().await
        };

        let mut state = self.state.write();
        match result {
            Ok(products) => {
                state.products = products;
                state.error = None;
            }
            Err(e) => {
                LogHelper::log_error_with_context("Loading products", &e);
                state.error = Some(UserErrorFormatter::format_for_ui(&e));
            }
        }
        state.loading = false;
        state.refreshing = false;
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    pub async fn load(&self, show_refreshing: bool) {
        self.begin(show_refreshing);
        self.fetch(show_refreshing).await;
    }

    pub async fn refresh(&self) {
        self.load(true).await;
    }

    /// Delete remotely, then drop the product from local state.
    pub async fn remove_product(&self, id: ProductId) -> Result<bool, InventoryError> {
        match self.service.delete(id).await {
            Ok(()) => {
                self.state.write().products.retain(|p| p.id != id);
                Ok(true)
            }
            Err(e) => {
                self.state.write().error = Some(UserErrorFormatter::format_for_ui(&e));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ApiError;
    use crate::repository::product_repository::MockProductRepository;
    use crate::services::refresh::RefreshSignal;

    fn query(mock: MockProductRepository) -> ProductsQuery {
        ProductsQuery::new(ProductService::new(Arc::new(mock), RefreshSignal::new()))
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = QueryState::default();
        assert!(state.loading);
        assert!(!state.refreshing);
        assert!(state.products.is_empty());
    }

    #[test]
    fn test_begin_sets_the_right_flag() {
        let query = query(MockProductRepository::new());
        query.state.write().loading = false;
        query.state.write().error = Some("old".into());

        query.begin(true);
        let state = query.snapshot();
        assert!(state.refreshing);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_load_success() {
        let mut mock = MockProductRepository::new();
        mock.expect_list()
            .returning(|| Ok(vec![Product::new(1, "Susu UHT", 6_000.0, 24)]));
        let query = query(mock);

        query.load(false).await;
        let state = query.snapshot();
        assert_eq!(state.products.len(), 1);
        assert!(!state.loading);
        assert!(!state.refreshing);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_products() {
        let mut mock = MockProductRepository::new();
        let mut first = true;
        mock.expect_list().returning(move || {
            if first {
                first = false;
                Ok(vec![Product::new(1, "Susu UHT", 6_000.0, 24)])
            } else {
                Err(ApiError::Timeout)
            }
        });
        let query = query(mock);

        query.load(false).await;
        query.refresh().await;

        let state = query.snapshot();
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Connection timed out, try again"));
        assert!(!state.refreshing);
    }

    #[tokio::test]
    async fn test_successful_refetch_clears_earlier_error() {
        let mut mock = MockProductRepository::new();
        let mut calls = 0;
        mock.expect_list().returning(move || {
            calls += 1;
            match calls {
                1 => Ok(vec![Product::new(1, "Susu UHT", 6_000.0, 24)]),
                2 => Err(ApiError::Timeout),
                _ => Ok(Vec::new()),
            }
        });
        let query = query(mock);

        query.load(false).await;
        query.refresh().await;
        assert!(query.snapshot().error.is_some());

        // Another screen mutates, the list re-fetches quietly
        query.service().refresh_signal().trigger();
        query.fetch(false).await;

        let state = query.snapshot();
        assert!(state.products.is_empty());
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_clear_error() {
        let query = query(MockProductRepository::new());
        query.state.write().error = Some("Data not found".into());
        query.clear_error();
        assert_eq!(query.snapshot().error, None);
    }

    #[tokio::test]
    async fn test_remove_product() {
        let mut mock = MockProductRepository::new();
        mock.expect_list().returning(|| {
            Ok(vec![
                Product::new(1, "Keep", 1.0, 1),
                Product::new(2, "Drop", 1.0, 1),
            ])
        });
        mock.expect_delete().returning(|id| {
            if id == ProductId(2) { Ok(()) } else { Err(ApiError::Server { status: 503 }) }
        });
        let query = query(mock);
        query.load(false).await;

        assert!(query.remove_product(ProductId(2)).await.unwrap());
        assert_eq!(query.snapshot().products.len(), 1);

        assert!(query.remove_product(ProductId(1)).await.is_err());
        let state = query.snapshot();
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Server error, try again later"));
    }
}
