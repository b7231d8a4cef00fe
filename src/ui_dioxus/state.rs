use crate::config::AppConfig;
use crate::domain::product::ProductId;
use crate::services::ProductService;
use dioxus::prelude::*;

/// Shared services, provided as context at the app root.
#[derive(Clone)]
pub struct AppState {
    pub service: ProductService,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(service: ProductService, config: AppConfig) -> Self {
        Self { service, config }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen {
    Products,
    Dashboard,
    Settings,
    Detail(ProductId),
    Add,
    Edit(ProductId),
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Products => "Products",
            Screen::Dashboard => "Dashboard",
            Screen::Settings => "Settings",
            Screen::Detail(_) => "Product Detail",
            Screen::Add => "Add Product",
            Screen::Edit(_) => "Edit Product",
        }
    }

    /// Where the back button of a pushed screen leads.
    pub fn parent(&self) -> Screen {
        match self {
            Screen::Edit(id) => Screen::Detail(*id),
            _ => Screen::Products,
        }
    }

    pub fn is_tab(&self) -> bool {
        matches!(self, Screen::Products | Screen::Dashboard | Screen::Settings)
    }
}

/// Message that outlives the screen which produced it, shown under the nav bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub message: String,
    pub is_error: bool,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }
}

pub fn use_flash() -> Signal<Option<Flash>> {
    use_context::<Signal<Option<Flash>>>()
}

pub fn use_navigation() -> Signal<Screen> {
    use_context::<Signal<Screen>>()
}

/// Current refresh generation as a signal; components that read it re-run
/// whenever a mutation anywhere in the app triggers a refresh.
pub fn use_refresh_generation() -> Signal<u64> {
    let state = use_context::<AppState>();
    let mut generation = use_signal(|| state.service.refresh_signal().generation());

    use_future(move || {
        let mut subscription = state.service.subscribe();
        async move {
            while let Some(next) = subscription.changed().await {
                generation.set(next);
            }
        }
    });

    generation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flash_is_not_an_error() {
        let flash = Flash::success("Product deleted");
        assert_eq!(flash.message, "Product deleted");
        assert!(!flash.is_error);
    }

    #[test]
    fn test_pushed_screens_lead_back() {
        let id = ProductId(4);
        assert_eq!(Screen::Edit(id).parent(), Screen::Detail(id));
        assert_eq!(Screen::Detail(id).parent(), Screen::Products);
        assert!(!Screen::Add.is_tab());
        assert!(Screen::Dashboard.is_tab());
    }
}
