use crate::domain::product::{Product, ProductId};
use crate::services::{InventoryError, UserErrorFormatter};
use crate::ui_dioxus::components::{
    DeleteProductDialog, ErrorState, LoadingSpinner, Notice, StockBadge,
};
use crate::ui_dioxus::state::{
    AppState, Flash, Screen, use_flash, use_navigation, use_refresh_generation,
};
use crate::utils::{format_currency, format_long_date};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn ProductDetail(id: ProductId) -> Element {
    let state = use_context::<AppState>();
    let mut screen = use_navigation();
    let generation = use_refresh_generation();

    let mut product = use_signal(|| None::<Product>);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut confirm_open = use_signal(|| false);
    let mut attempt = use_signal(|| 0u32);
    let mut flash = use_flash();

    // Reload on mount, on retry and whenever the global refresh fires
    let service = state.service.clone();
    use_effect(move || {
        let generation = generation();
        let attempt = attempt();
        debug!(product_id = %id, generation, attempt, "Loading product detail");
        let service = service.clone();
        spawn(async move {
            loading.set(true);
            match service.get(id).await {
                Ok(p) => {
                    product.set(Some(p));
                    load_error.set(None);
                }
                // Deleted from another screen while this one was open
                Err(InventoryError::ProductNotFound { .. }) => {
                    product.set(None);
                    load_error.set(None);
                }
                Err(e) => load_error.set(Some(UserErrorFormatter::format_for_ui(&e))),
            }
            loading.set(false);
        });
    });

    let service = state.service.clone();
    let confirm_delete = move |_: ()| {
        confirm_open.set(false);
        let service = service.clone();
        spawn(async move {
            match service.delete(id).await {
                Ok(()) => {
                    flash.set(Some(Flash::success("Product deleted")));
                    screen.set(Screen::Products);
                }
                Err(e) => load_error.set(Some(UserErrorFormatter::format_for_ui(&e))),
            }
        });
    };

    if loading() && product.read().is_none() {
        return rsx! { LoadingSpinner { message: "Loading product details...".to_string() } };
    }

    let Some(current) = product() else {
        if let Some(message) = load_error() {
            return rsx! {
                ErrorState {
                    message: message,
                    on_retry: move |_| *attempt.write() += 1,
                }
            };
        }
        return rsx! {
            div {
                style: "padding: 48px; text-align: center;",
                p { style: "color: #EF4444;", "Product not found" }
                button {
                    style: "padding: 10px 24px; border: none; border-radius: 10px; background: #3B82F6; color: white; cursor: pointer;",
                    onclick: move |_| screen.set(Screen::Products),
                    "Back"
                }
            }
        };
    };

    let name = current.name.clone();
    let price = format_currency(current.price);
    let stock = current.stock;
    let created = format_long_date(&current.created_at);
    let updated = format_long_date(&current.updated_at);

    rsx! {
        div {
            style: "padding: 20px; background: #FAFAFA; min-height: 100vh;",

            if let Some(message) = load_error() {
                Notice { message: message, is_error: true, on_dismiss: move |_| load_error.set(None) }
            }

            div {
                style: "background: white; border-radius: 16px; padding: 24px; margin-bottom: 20px;",

                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 20px;",
                    h2 { style: "margin: 0;", "{name}" }
                    StockBadge { stock: stock }
                }

                div { style: "margin-bottom: 16px;",
                    div { style: "color: #64748B; font-size: 14px;", "Price" }
                    div { style: "font-size: 26px; font-weight: 700; color: #3B82F6;", "{price}" }
                }

                div { style: "margin-bottom: 16px;",
                    div { style: "color: #64748B; font-size: 14px;", "Stock Available" }
                    div { style: "font-size: 20px; font-weight: 600;", "{stock} units" }
                }

                div {
                    style: "border-top: 1px solid #F1F5F9; padding-top: 16px; display: grid; grid-template-columns: 140px 1fr; gap: 8px;",
                    span { style: "color: #64748B;", "Created:" }
                    span { "{created}" }
                    span { style: "color: #64748B;", "Last updated:" }
                    span { "{updated}" }
                    span { style: "color: #64748B;", "Product ID:" }
                    span { "#{id}" }
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 12px;",
                button {
                    style: "padding: 14px; border: none; border-radius: 12px; background: #3B82F6; color: white; cursor: pointer;",
                    onclick: move |_| screen.set(Screen::Edit(id)),
                    "Edit Product"
                }
                button {
                    style: "padding: 14px; border: none; border-radius: 12px; background: #EF4444; color: white; cursor: pointer;",
                    onclick: move |_| confirm_open.set(true),
                    "Delete Product"
                }
            }

            if confirm_open() {
                DeleteProductDialog {
                    product_name: name.clone(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| confirm_open.set(false),
                }
            }
        }
    }
}
