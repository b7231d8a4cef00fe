use crate::domain::product::Product;
use crate::services::search::{filter_products, result_summary};
use crate::services::ProductsQuery;
use crate::ui_dioxus::components::{
    DeleteProductDialog, EmptyState, ErrorState, LoadingSpinner, Notice, ProductCard,
};
use crate::ui_dioxus::state::{
    AppState, Flash, Screen, use_flash, use_navigation, use_refresh_generation,
};
use dioxus::prelude::*;

#[component]
pub fn ProductList() -> Element {
    let state = use_context::<AppState>();
    let mut screen = use_navigation();
    let generation = use_refresh_generation();
    let query = use_hook(|| ProductsQuery::new(state.service.clone()));

    let mut snapshot = use_signal(|| query.snapshot());
    let mut search = use_signal(String::new);
    let mut pending_delete = use_signal(|| None::<Product>);
    let mut flash = use_flash();

    // Initial load, then a quiet re-fetch whenever another screen mutates data
    use_effect({
        let query = query.clone();
        move || {
            let _ = generation();
            let query = query.clone();
            spawn(async move {
                query.fetch(false).await;
                snapshot.set(query.snapshot());
            });
        }
    });

    let mut refresh = {
        let query = query.clone();
        move || {
            let query = query.clone();
            query.begin(true);
            snapshot.set(query.snapshot());
            spawn(async move {
                query.fetch(true).await;
                snapshot.set(query.snapshot());
            });
        }
    };

    let confirm_delete = {
        let query = query.clone();
        move |_: ()| {
            let Some(product) = pending_delete.take() else {
                return;
            };
            let query = query.clone();
            spawn(async move {
                // Failures land in the query error and render as a notice
                if query.remove_product(product.id).await.is_ok() {
                    flash.set(Some(Flash::success("Product deleted")));
                }
                snapshot.set(query.snapshot());
            });
        }
    };

    let dismiss_error = {
        let query = query.clone();
        move |_: ()| {
            query.clear_error();
            snapshot.set(query.snapshot());
        }
    };

    let current = snapshot.read().clone();

    if current.loading {
        return rsx! { LoadingSpinner { message: "Loading products...".to_string() } };
    }

    if let Some(error) = current.error.clone() {
        if current.products.is_empty() {
            return rsx! { ErrorState { message: error, on_retry: move |_| refresh() } };
        }
    }

    let query_text = search.read().clone();
    let filtered: Vec<Product> = filter_products(&current.products, &query_text)
        .into_iter()
        .cloned()
        .collect();
    let summary = result_summary(filtered.len(), &query_text);
    let searching = !query_text.is_empty();

    rsx! {
        div {
            style: "padding: 20px; background: #FAFAFA; min-height: 100vh;",

            if let Some(message) = current.error.clone() {
                Notice { message: message, is_error: true, on_dismiss: dismiss_error }
            }

            // Search bar
            div {
                style: "display: flex; gap: 12px; margin-bottom: 12px;",
                input {
                    style: "flex: 1; padding: 12px 16px; border: 1px solid #E2E8F0; border-radius: 16px; font-size: 16px;",
                    placeholder: "Search products...",
                    value: "{query_text}",
                    oninput: move |evt| search.set(evt.value()),
                }
                if searching {
                    button {
                        style: "padding: 8px 12px; border: none; border-radius: 12px; background: #F1F5F9; cursor: pointer;",
                        onclick: move |_| search.set(String::new()),
                        "✕"
                    }
                }
                button {
                    style: "padding: 8px 12px; border: none; border-radius: 12px; background: #F1F5F9; cursor: pointer;",
                    disabled: current.refreshing,
                    onclick: move |_| refresh(),
                    if current.refreshing { "Refreshing..." } else { "↻" }
                }
            }

            if searching {
                p { style: "color: #64748B; font-size: 13px;", "{summary}" }
            }

            if filtered.is_empty() {
                if searching {
                    EmptyState {
                        title: "No Results".to_string(),
                        message: format!("No products match \"{}\"", query_text),
                        action_text: "Clear Search".to_string(),
                        on_action: move |_| search.set(String::new()),
                    }
                } else {
                    EmptyState {
                        title: "No Products Yet".to_string(),
                        message: "Start by adding your first product".to_string(),
                        action_text: "Add Product".to_string(),
                        on_action: move |_| screen.set(Screen::Add),
                    }
                }
            } else {
                for product in filtered {
                    ProductCard {
                        key: "{product.id}",
                        product: product.clone(),
                        on_open: move |id| screen.set(Screen::Detail(id)),
                        on_edit: move |id| screen.set(Screen::Edit(id)),
                        on_delete: move |p| pending_delete.set(Some(p)),
                    }
                }
            }

            // Floating add button
            button {
                style: "position: fixed; right: 24px; bottom: 24px; width: 56px; height: 56px; border-radius: 28px;
                       background: #3B82F6; color: white; border: none; font-size: 28px; cursor: pointer;",
                onclick: move |_| screen.set(Screen::Add),
                "+"
            }

            if let Some(product) = pending_delete() {
                DeleteProductDialog {
                    product_name: product.name.clone(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
