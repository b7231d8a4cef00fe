use crate::domain::product::{Product, ProductId};
use crate::services::analytics::RankedProduct;
use crate::services::{Dashboard, UserErrorFormatter};
use crate::ui_dioxus::components::{EmptyState, ErrorState, LoadingSpinner};
use crate::ui_dioxus::state::{AppState, Screen, use_navigation, use_refresh_generation};
use crate::utils::{format_currency, format_short_currency};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn DashboardView() -> Element {
    let state = use_context::<AppState>();
    let mut screen = use_navigation();
    let generation = use_refresh_generation();

    let mut dashboard = use_signal(|| None::<Dashboard>);
    let mut loading = use_signal(|| true);
    let mut refreshing = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Statistics are derived from the full product list on every refresh
    let service = state.service.clone();
    use_effect(move || {
        let generation = generation();
        debug!(generation, "Recomputing dashboard");
        let service = service.clone();
        spawn(async move {
            match service.list().await {
                Ok(products) => {
                    dashboard.set(Some(Dashboard::from_products(&products)));
                    error.set(None);
                }
                Err(e) => error.set(Some(UserErrorFormatter::format_for_ui(&e))),
            }
            loading.set(false);
        });
    });

    let service = state.service.clone();
    let mut refresh = move || {
        refreshing.set(true);
        let service = service.clone();
        spawn(async move {
            match service.refetch().await {
                Ok(products) => {
                    dashboard.set(Some(Dashboard::from_products(&products)));
                    error.set(None);
                }
                Err(e) => error.set(Some(UserErrorFormatter::format_for_ui(&e))),
            }
            refreshing.set(false);
        });
    };

    if loading() {
        return rsx! { LoadingSpinner { message: "Loading dashboard...".to_string() } };
    }

    let Some(current) = dashboard() else {
        let message = error().unwrap_or_else(|| "Something went wrong".to_string());
        return rsx! { ErrorState { message: message, on_retry: move |_| refresh() } };
    };

    if current.is_empty() {
        return rsx! {
            EmptyState {
                title: "No Data Yet".to_string(),
                message: "Add products to see inventory statistics".to_string(),
                action_text: "Add Product".to_string(),
                on_action: move |_| screen.set(Screen::Add),
            }
        };
    }

    let stats = current.stats.clone();
    let total_value = format_short_currency(stats.total_value);

    rsx! {
        div {
            style: "padding: 20px; background: #FAFAFA; min-height: 100vh;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h2 { style: "margin: 0;", "Inventory Overview" }
                button {
                    style: "padding: 8px 16px; border: none; border-radius: 10px; background: #F1F5F9; cursor: pointer;",
                    disabled: refreshing(),
                    onclick: move |_| refresh(),
                    if refreshing() { "Refreshing..." } else { "↻ Refresh" }
                }
            }

            if let Some(message) = error() {
                p { style: "color: #EF4444; font-size: 13px;", "{message}" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; margin-bottom: 24px;",
                StatCard { title: "Total Products".to_string(), value: stats.total_products.to_string(), color: "#3B82F6".to_string() }
                StatCard { title: "Inventory Value".to_string(), value: total_value, color: "#10B981".to_string() }
                StatCard { title: "Low Stock".to_string(), value: stats.low_stock_products.to_string(), color: "#F59E0B".to_string() }
                StatCard { title: "Out of Stock".to_string(), value: stats.out_of_stock_products.to_string(), color: "#EF4444".to_string() }
            }

            Section { title: "Top Products by Value".to_string(),
                for entry in current.top_by_value.clone() {
                    ValueBar {
                        key: "{entry.product.id}",
                        entry: entry.clone(),
                        on_open: move |id| screen.set(Screen::Detail(id)),
                    }
                }
            }

            Section { title: "Needs Restocking".to_string(),
                if current.restock.is_empty() {
                    p { style: "color: #64748B;", "All products are well stocked" }
                }
                for product in current.restock.clone() {
                    ProductRow {
                        key: "{product.id}",
                        product: product.clone(),
                        detail: format!("{} left", product.stock),
                        on_open: move |id| screen.set(Screen::Detail(id)),
                    }
                }
            }

            Section { title: "Highest Priced".to_string(),
                for product in current.top_by_price.clone() {
                    ProductRow {
                        key: "{product.id}",
                        product: product.clone(),
                        detail: format_currency(product.price),
                        on_open: move |id| screen.set(Screen::Detail(id)),
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: String, color: String) -> Element {
    rsx! {
        div {
            style: "background: white; border-radius: 16px; padding: 16px; border: 1px solid #F1F5F9;",
            div { style: "color: #64748B; font-size: 13px; margin-bottom: 6px;", "{title}" }
            div { style: format!("font-size: 24px; font-weight: 700; color: {};", color), "{value}" }
        }
    }
}

#[component]
fn Section(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "background: white; border-radius: 16px; padding: 16px; margin-bottom: 16px; border: 1px solid #F1F5F9;",
            h3 { style: "margin: 0 0 12px 0; font-size: 16px;", "{title}" }
            {children}
        }
    }
}

#[component]
fn ValueBar(entry: RankedProduct, on_open: EventHandler<ProductId>) -> Element {
    let id = entry.product.id;
    let rank = entry.rank;
    let name = entry.product.name.clone();
    let value = format_short_currency(entry.total_value);
    let width = (entry.share * 100.0).clamp(0.0, 100.0);

    rsx! {
        div {
            style: "margin-bottom: 12px; cursor: pointer;",
            onclick: move |_| on_open.call(id),
            div {
                style: "display: flex; justify-content: space-between; font-size: 14px; margin-bottom: 4px;",
                span { "#{rank} {name}" }
                span { style: "font-weight: 600;", "{value}" }
            }
            div {
                style: "height: 8px; border-radius: 4px; background: #F1F5F9;",
                div { style: format!("height: 8px; border-radius: 4px; background: #3B82F6; width: {:.1}%;", width) }
            }
        }
    }
}

#[component]
fn ProductRow(product: Product, detail: String, on_open: EventHandler<ProductId>) -> Element {
    let id = product.id;
    let name = product.name.clone();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #F8FAFC; cursor: pointer;",
            onclick: move |_| on_open.call(id),
            span { "{name}" }
            span { style: "color: #64748B;", "{detail}" }
        }
    }
}
