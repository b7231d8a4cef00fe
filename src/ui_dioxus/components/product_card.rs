use crate::domain::product::{Product, ProductId};
use crate::utils::{format_currency, format_short_date};
use dioxus::prelude::*;

#[component]
pub fn StockBadge(stock: u32) -> Element {
    let status = crate::domain::product::StockStatus::from_stock(stock);
    let label = status.label();

    rsx! {
        span {
            style: format!("padding: 4px 10px; border-radius: 12px; color: white; font-size: 12px;
                   min-width: 80px; text-align: center; background: {};", status.color()),
            "{label}"
        }
    }
}

#[component]
pub fn ProductCard(
    product: Product,
    on_open: EventHandler<ProductId>,
    on_edit: EventHandler<ProductId>,
    on_delete: EventHandler<Product>,
) -> Element {
    let id = product.id;
    let price = format_currency(product.price);
    let created = format_short_date(&product.created_at);
    let name = product.name.clone();
    let stock = product.stock;
    let for_delete = product.clone();

    rsx! {
        div {
            style: "background: white; border: 1px solid #F1F5F9; border-radius: 16px; padding: 16px;
                   margin-bottom: 12px; cursor: pointer;",
            onclick: move |_| on_open.call(id),

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 12px;",
                h3 { style: "margin: 0; font-size: 17px;", "{name}" }
                StockBadge { stock: stock }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 6px; margin: 12px 0;",
                span { style: "color: #3B82F6; font-weight: 700;", "💵 {price}" }
                span { style: "color: #6B7280;", "📦 Stock: {stock} units" }
                span { style: "color: #6B7280;", "📅 Created: {created}" }
            }

            div {
                style: "display: flex; gap: 12px;",
                button {
                    style: "flex: 1; padding: 8px; background: #3B82F6; color: white; border: none; border-radius: 10px; cursor: pointer;",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_edit.call(id);
                    },
                    "✏️ Edit"
                }
                button {
                    style: "flex: 1; padding: 8px; background: #EF4444; color: white; border: none; border-radius: 10px; cursor: pointer;",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_delete.call(for_delete.clone());
                    },
                    "🗑️ Delete"
                }
            }
        }
    }
}
