// Test helpers for integration testing

use crate::domain::product::Product;
use crate::repository::{InMemoryProductRepository, Repository};
use crate::services::{ProductService, RefreshSignal};
use std::sync::Arc;

pub struct TestContext {
    pub backend: InMemoryProductRepository,
    pub repository: Arc<Repository>,
    pub service: ProductService,
}

impl TestContext {
    pub fn new_for_test() -> Self {
        Self::with_products(Vec::new())
    }

    /// Isolated backend and refresh signal, so tests never see each other's triggers.
    pub fn with_products(products: Vec<Product>) -> Self {
        let backend = InMemoryProductRepository::with_products(products);
        let repository = Arc::new(Repository::new(backend.clone()));
        let service = ProductService::new(repository.products.clone(), RefreshSignal::new());
        Self {
            backend,
            repository,
            service,
        }
    }

    pub fn with_sample_catalog() -> Self {
        Self::with_products(sample_catalog())
    }
}

/// A small shop catalog covering every stock status.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Beras Pandan Wangi 5kg", 78_000.0, 14),
        Product::new(2, "Minyak Goreng 2L", 36_500.0, 3),
        Product::new(3, "Gula Pasir 1kg", 17_000.0, 0),
        Product::new(4, "Kopi Bubuk Toraja", 95_000.0, 6),
        Product::new(5, "Teh Celup Melati", 8_500.0, 40),
        Product::new(6, "Susu Kental Manis", 12_000.0, 1),
        Product::new(7, "Mie Instan Goreng", 3_500.0, 120),
    ]
}
