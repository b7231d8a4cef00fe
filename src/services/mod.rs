pub mod analytics;
pub mod error_handling;
mod product_service;
mod products_query;
pub mod query_cache;
pub mod refresh;
pub mod search;
pub mod validation;

pub use analytics::{Dashboard, InventoryStats, RankedProduct};
pub use error_handling::{InventoryError, UserErrorFormatter};
pub use product_service::{ProductService, ServiceResult};
pub use products_query::{ProductsQuery, QueryState};
pub use refresh::{RefreshSignal, RefreshSubscription};
pub use validation::{FormErrors, FormField, ProductForm};
