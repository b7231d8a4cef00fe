use crate::domain::product::{Product, ProductId};
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    generation: u64,
}

#[derive(Default)]
struct CacheState {
    collection: Option<Entry<Vec<Product>>>,
    products: HashMap<ProductId, Entry<Product>>,
}

/// Query results tagged with the refresh generation they were fetched at.
///
/// An entry is served only while its generation is the current one, so a
/// single refresh trigger invalidates every cached query at once.
#[derive(Default)]
pub struct ProductCache {
    state: RwLock<CacheState>,
}

impl ProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self, generation: u64) -> Option<Vec<Product>> {
        self.state
            .read()
            .collection
            .as_ref()
            .filter(|e| e.generation == generation)
            .map(|e| e.value.clone())
    }

    /// Store the full collection, seeding the per-product entries from it.
    pub fn store_collection(&self, products: Vec<Product>, generation: u64) {
        let mut state = self.state.write();
        state.products.retain(|_, e| e.generation == generation);
        for product in &products {
            state.products.insert(
                product.id,
                Entry {
                    value: product.clone(),
                    generation,
                },
            );
        }
        state.collection = Some(Entry {
            value: products,
            generation,
        });
    }

    pub fn product(&self, id: ProductId, generation: u64) -> Option<Product> {
        self.state
            .read()
            .products
            .get(&id)
            .filter(|e| e.generation == generation)
            .map(|e| e.value.clone())
    }

    pub fn store_product(&self, product: Product, generation: u64) {
        self.state.write().products.insert(
            product.id,
            Entry {
                value: product,
                generation,
            },
        );
    }

    pub fn evict(&self, id: ProductId) {
        let mut state = self.state.write();
        state.products.remove(&id);
        if let Some(entry) = state.collection.as_mut() {
            entry.value.retain(|p| p.id != id);
        }
    }

    pub fn clear(&self) {
        *self.state.write() = CacheState::default();
    }

    pub fn cached_products(&self) -> usize {
        self.state.read().products.len()
    }
}
