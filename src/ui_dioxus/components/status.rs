use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 64px;",
            div { style: "font-size: 32px; margin-bottom: 12px;", "⏳" }
            p { style: "color: #64748B;", "{message}" }
        }
    }
}

#[component]
pub fn EmptyState(
    title: String,
    message: String,
    action_text: String,
    on_action: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 48px; text-align: center;",
            div { style: "font-size: 40px; margin-bottom: 12px;", "📦" }
            h3 { style: "margin: 0 0 8px 0;", "{title}" }
            p { style: "color: #64748B; margin: 0 0 20px 0;", "{message}" }
            button {
                style: "padding: 10px 24px; background: #3B82F6; color: white; border: none; border-radius: 12px; cursor: pointer;",
                onclick: move |_| on_action.call(()),
                "{action_text}"
            }
        }
    }
}

#[component]
pub fn ErrorState(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 48px; text-align: center;",
            h3 { style: "color: #EF4444; margin: 0 0 8px 0;", "Something Went Wrong" }
            p { style: "color: #64748B; margin: 0 0 24px 0;", "{message}" }
            button {
                style: "padding: 12px 28px; background: #3B82F6; color: white; border: none; border-radius: 12px; cursor: pointer;",
                onclick: move |_| on_retry.call(()),
                "↻ Try Again"
            }
        }
    }
}

/// Dismissible one-line notice shown after a mutation.
#[component]
pub fn Notice(message: String, is_error: bool, on_dismiss: EventHandler<()>) -> Element {
    let background = if is_error { "#FEE2E2" } else { "#DCFCE7" };

    rsx! {
        div {
            style: format!("display: flex; justify-content: space-between; align-items: center;
                   padding: 10px 16px; margin-bottom: 12px; border-radius: 10px; background: {};", background),
            span { "{message}" }
            button {
                style: "border: none; background: transparent; cursor: pointer;",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}
