use dioxus::prelude::*;

use crate::ui_dioxus::components::Notice;
use crate::ui_dioxus::state::{Flash, Screen, use_flash, use_navigation};
use crate::ui_dioxus::views::{
    DashboardView, ProductDetail, ProductFormView, ProductList, SettingsView,
};

#[component]
pub fn App() -> Element {
    let screen = use_context_provider(|| Signal::new(Screen::Products));
    let mut flash = use_context_provider(|| Signal::new(None::<Flash>));
    let body = match screen() {
        Screen::Products => rsx! { ProductList {} },
        Screen::Dashboard => rsx! { DashboardView {} },
        Screen::Settings => rsx! { SettingsView {} },
        // Keyed so switching between products remounts with fresh state
        Screen::Detail(id) => rsx! { ProductDetail { key: "detail-{id}", id: id } },
        Screen::Add => {
            let add_key = "add";
            rsx! { ProductFormView { key: "{add_key}" } }
        }
        Screen::Edit(id) => rsx! { ProductFormView { key: "edit-{id}", id: Some(id) } },
    };

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; color: #1E293B;",
            NavBar {}
            if let Some(current) = flash() {
                Notice {
                    message: current.message.clone(),
                    is_error: current.is_error,
                    on_dismiss: move |_| flash.set(None),
                }
            }
            {body}
        }
    }
}

#[component]
fn NavBar() -> Element {
    let mut screen = use_navigation();
    let current = screen();
    let title = current.title();

    rsx! {
        nav {
            style: "display: flex; align-items: center; gap: 12px; padding: 12px 20px; background: white;
                   border-bottom: 1px solid #E2E8F0; position: sticky; top: 0; z-index: 10;",

            if !current.is_tab() {
                button {
                    style: "padding: 6px 12px; border: none; border-radius: 8px; background: #F1F5F9; cursor: pointer;",
                    onclick: move |_| screen.set(current.parent()),
                    "← Back"
                }
            }

            h1 { style: "margin: 0; font-size: 20px; flex: 1;", "{title}" }

            NavItem { target: Screen::Products, label: "Products", icon: "📦" }
            NavItem { target: Screen::Dashboard, label: "Dashboard", icon: "📊" }
            NavItem { target: Screen::Settings, label: "Settings", icon: "⚙️" }
        }
    }
}

#[component]
fn NavItem(target: Screen, label: &'static str, icon: &'static str) -> Element {
    let mut screen = use_navigation();
    let mut flash = use_flash();
    let is_active = screen() == target;
    let background = if is_active { "#3B82F6" } else { "transparent" };
    let color = if is_active { "white" } else { "#475569" };

    rsx! {
        button {
            style: format!("padding: 8px 14px; border: none; border-radius: 10px; cursor: pointer; background: {}; color: {};", background, color),
            onclick: move |_| {
                flash.set(None);
                screen.set(target);
            },
            span { "{icon} " }
            span { "{label}" }
        }
    }
}
