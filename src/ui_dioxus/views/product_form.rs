use crate::domain::product::ProductId;
use crate::services::validation::SizeLimits;
use crate::services::{FormErrors, FormField, InventoryError, ProductForm, UserErrorFormatter};
use crate::ui_dioxus::components::{ErrorState, LoadingSpinner, Notice};
use crate::ui_dioxus::state::{AppState, Flash, Screen, use_flash, use_navigation};
use dioxus::prelude::*;

/// Add form when `id` is `None`, edit form otherwise.
#[component]
pub fn ProductFormView(id: Option<ProductId>) -> Element {
    let state = use_context::<AppState>();
    let mut screen = use_navigation();

    let mut form = use_signal(ProductForm::default);
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);
    let mut initial_loading = use_signal(|| id.is_some());
    let mut failure = use_signal(|| None::<String>);
    let mut load_failure = use_signal(|| None::<String>);
    let mut attempt = use_signal(|| 0u32);
    let mut flash = use_flash();

    // Edit mode prefills from the backend; retry re-runs this effect
    let service = state.service.clone();
    use_effect(move || {
        let _ = attempt();
        let Some(id) = id else { return };
        let service = service.clone();
        spawn(async move {
            initial_loading.set(true);
            match service.get(id).await {
                Ok(product) => {
                    form.set(ProductForm::from_product(&product));
                    load_failure.set(None);
                }
                Err(e) => load_failure.set(Some(UserErrorFormatter::format_for_ui(&e))),
            }
            initial_loading.set(false);
        });
    });

    let service = state.service.clone();
    let submit = move |_: MouseEvent| {
        // Never submit an edit form that was not prefilled
        if initial_loading() || load_failure.read().is_some() {
            return;
        }
        let snapshot = form.read().clone();
        // Validate locally first so field errors show without a round trip
        if let Err(field_errors) = snapshot.validate() {
            errors.set(field_errors);
            return;
        }

        saving.set(true);
        let service = service.clone();
        spawn(async move {
            let result = match id {
                Some(id) => service.update(id, &snapshot).await,
                None => service.create(&snapshot).await,
            };
            saving.set(false);
            match result {
                Ok(product) => {
                    let message = if id.is_some() { "Product updated" } else { "Product saved" };
                    flash.set(Some(Flash::success(message)));
                    screen.set(Screen::Detail(product.id));
                }
                Err(InventoryError::Validation(field_errors)) => errors.set(field_errors),
                Err(e) => failure.set(Some(UserErrorFormatter::format_for_ui(&e))),
            }
        });
    };

    if initial_loading() {
        return rsx! { LoadingSpinner { message: "Loading product data...".to_string() } };
    }

    if let Some(message) = load_failure() {
        return rsx! {
            ErrorState {
                message: message,
                on_retry: move |_| *attempt.write() += 1,
            }
        };
    }

    let back = match id {
        Some(id) => Screen::Detail(id),
        None => Screen::Products,
    };
    let submit_label = match (saving(), id) {
        (true, _) => "Saving...",
        (false, Some(_)) => "Update Product",
        (false, None) => "Save Product",
    };

    rsx! {
        div {
            style: "padding: 20px; background: #FAFAFA; min-height: 100vh; max-width: 560px;",

            if let Some(message) = failure() {
                Notice { message: message, is_error: true, on_dismiss: move |_| failure.set(None) }
            }

            FormInput {
                label: "Product Name *".to_string(),
                placeholder: "Enter product name".to_string(),
                value: form.read().value(FormField::Name).to_string(),
                error: errors.read().get(FormField::Name).map(str::to_string),
                max_length: SizeLimits::MAX_NAME_LENGTH,
                on_input: move |value: String| {
                    form.write().update_field(FormField::Name, value, &mut errors.write());
                },
            }

            FormInput {
                label: "Price (Rp) *".to_string(),
                placeholder: "Enter product price".to_string(),
                value: form.read().value(FormField::Price).to_string(),
                error: errors.read().get(FormField::Price).map(str::to_string),
                max_length: 20,
                on_input: move |value: String| {
                    form.write().update_field(FormField::Price, value, &mut errors.write());
                },
            }

            FormInput {
                label: "Stock *".to_string(),
                placeholder: "Enter stock quantity".to_string(),
                value: form.read().value(FormField::Stock).to_string(),
                error: errors.read().get(FormField::Stock).map(str::to_string),
                max_length: 10,
                on_input: move |value: String| {
                    form.write().update_field(FormField::Stock, value, &mut errors.write());
                },
            }

            button {
                style: "width: 100%; padding: 14px; margin-top: 8px; border: none; border-radius: 12px;
                       background: #3B82F6; color: white; font-size: 16px; cursor: pointer;",
                disabled: saving(),
                onclick: submit,
                "{submit_label}"
            }

            button {
                style: "width: 100%; padding: 14px; margin-top: 12px; border: 1px solid #E2E8F0; border-radius: 12px;
                       background: white; font-size: 16px; cursor: pointer;",
                disabled: saving(),
                onclick: move |_| screen.set(back),
                "Cancel"
            }
        }
    }
}

#[component]
fn FormInput(
    label: String,
    placeholder: String,
    value: String,
    error: Option<String>,
    max_length: usize,
    on_input: EventHandler<String>,
) -> Element {
    let border = if error.is_some() { "#EF4444" } else { "#E2E8F0" };

    rsx! {
        div {
            style: "margin-bottom: 20px;",
            label { style: "display: block; font-weight: 600; margin-bottom: 8px;", "{label}" }
            input {
                style: format!("width: 100%; padding: 12px 16px; border: 1px solid {}; border-radius: 12px; font-size: 16px;", border),
                placeholder: "{placeholder}",
                maxlength: "{max_length}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            if let Some(message) = error {
                p { style: "color: #EF4444; font-size: 13px; margin: 6px 0 0 0;", "{message}" }
            }
        }
    }
}
