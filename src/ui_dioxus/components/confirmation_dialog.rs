use dioxus::prelude::*;

#[component]
pub fn ConfirmationDialog(
    title: String,
    message: String,
    confirm_text: String,
    cancel_text: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
    danger: bool,
) -> Element {
    let confirm_color = if danger { "#EF4444" } else { "#3B82F6" };

    rsx! {
        // Modal backdrop
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 1000;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_cancel.call(()),

            div {
                style: "background: white; border-radius: 16px; padding: 24px;
                       width: 90%; max-width: 400px;",
                onclick: move |e| e.stop_propagation(),

                h3 { style: "margin: 0 0 12px 0; font-size: 20px;", "{title}" }
                p { style: "margin: 0 0 24px 0; color: #64748B;", "{message}" }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 10px;",

                    button {
                        style: "padding: 8px 20px; border: 1px solid #E2E8F0; background: white;
                               border-radius: 8px; cursor: pointer;",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_text}"
                    }

                    button {
                        style: format!("padding: 8px 20px; border: none; background: {}; color: white;
                               border-radius: 8px; cursor: pointer;", confirm_color),
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}

/// Delete confirmation used by the list and detail screens.
#[component]
pub fn DeleteProductDialog(
    product_name: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ConfirmationDialog {
            title: "Delete Product".to_string(),
            message: format!("Are you sure you want to delete \"{}\"?", product_name),
            confirm_text: "Delete".to_string(),
            cancel_text: "Cancel".to_string(),
            on_confirm: move |_| on_confirm.call(()),
            on_cancel: move |_| on_cancel.call(()),
            danger: true,
        }
    }
}
