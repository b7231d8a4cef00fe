pub mod confirmation_dialog;
pub mod product_card;
pub mod status;

pub use confirmation_dialog::{ConfirmationDialog, DeleteProductDialog};
pub use product_card::{ProductCard, StockBadge};
pub use status::{EmptyState, ErrorState, LoadingSpinner, Notice};
