use crate::domain::product::ProductId;
use crate::repository::ApiError;
use crate::services::validation::FormErrors;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors surfaced by the service layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Product not found: {id}")]
    ProductNotFound { id: ProductId },

    #[error("Validation failed: {0}")]
    Validation(FormErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl InventoryError {
    /// Map a repository error for a single-product operation.
    pub fn for_product(id: ProductId, error: ApiError) -> Self {
        if error.is_not_found() {
            InventoryError::ProductNotFound { id }
        } else {
            InventoryError::Api(error)
        }
    }

    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            InventoryError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_product_operation(operation: &str, product_id: Option<ProductId>, success: bool) {
        let id = product_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
        if success {
            info!(
                product_id = %id,
                operation = %operation,
                "Product operation completed successfully"
            );
        } else {
            error!(product_id = %id, operation = %operation, "Product operation failed");
        }
    }

    pub fn log_validation_failure(errors: &FormErrors) {
        for (field, reason) in errors.messages() {
            warn!(field = field.label(), reason = %reason, "Validation failed");
        }
    }

    pub fn log_error_with_context(context: &str, error: &(dyn std::error::Error + 'static)) {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        error!(context = %context, error = %error, error_chain = ?chain, "Error occurred");
    }
}

/// User-friendly error messages
pub struct UserErrorFormatter;

impl UserErrorFormatter {
    pub fn format_for_ui(error: &InventoryError) -> String {
        match error {
            InventoryError::ProductNotFound { .. } => "Product not found".to_string(),
            InventoryError::Validation(_) => "Please fix the highlighted fields".to_string(),
            InventoryError::Api(ApiError::Network(_)) => {
                "Network connection error. Please check your connection and try again.".to_string()
            }
            InventoryError::Api(ApiError::Decode(_)) => {
                "The server sent an unexpected response. Please try again.".to_string()
            }
            InventoryError::Api(api) => api.to_string(),
        }
    }

    pub fn format_anyhow(error: &anyhow::Error) -> String {
        if let Some(inventory) = error.downcast_ref::<InventoryError>() {
            return Self::format_for_ui(inventory);
        }
        if let Some(api) = error.downcast_ref::<ApiError>() {
            return Self::format_for_ui(&InventoryError::Api(api.clone()));
        }

        "An unexpected error occurred. Please try again.".to_string()
    }
}
