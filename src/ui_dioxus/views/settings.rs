use crate::services::UserErrorFormatter;
use crate::ui_dioxus::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SettingsView() -> Element {
    let state = use_context::<AppState>();
    let mut checking = use_signal(|| false);
    let mut connection = use_signal(|| None::<(String, bool)>);

    let api_url = state.config.api_base_url.clone();
    let timeout = state.config.timeout_seconds;
    let log_level = state.config.log_level.clone();
    let version = env!("CARGO_PKG_VERSION");
    let config_path = crate::config::AppConfig::config_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| "unavailable".to_string());

    let service = state.service.clone();
    let test_connection = move |_: MouseEvent| {
        checking.set(true);
        connection.set(None);
        let service = service.clone();
        spawn(async move {
            match service.health().await {
                Ok(health) => connection.set(Some((health.summary(), false))),
                Err(e) => connection.set(Some((UserErrorFormatter::format_for_ui(&e), true))),
            }
            checking.set(false);
        });
    };

    rsx! {
        div {
            style: "padding: 20px; background: #FAFAFA; min-height: 100vh; max-width: 640px;",

            div {
                style: "background: white; border-radius: 16px; padding: 20px; margin-bottom: 16px; border: 1px solid #F1F5F9;",
                h3 { style: "margin: 0 0 16px 0;", "Backend" }
                SettingRow { label: "API URL".to_string(), value: api_url }
                SettingRow { label: "Request timeout".to_string(), value: format!("{} seconds", timeout) }
                SettingRow { label: "Log level".to_string(), value: log_level }
                SettingRow { label: "Config file".to_string(), value: config_path }

                button {
                    style: "margin-top: 16px; padding: 10px 20px; border: none; border-radius: 10px; background: #3B82F6; color: white; cursor: pointer;",
                    disabled: checking(),
                    onclick: test_connection,
                    if checking() { "Checking..." } else { "Test Connection" }
                }

                if let Some((message, is_error)) = connection() {
                    p {
                        style: format!("margin-top: 12px; color: {};", if is_error { "#EF4444" } else { "#10B981" }),
                        "{message}"
                    }
                }
            }

            div {
                style: "background: white; border-radius: 16px; padding: 20px; border: 1px solid #F1F5F9;",
                h3 { style: "margin: 0 0 16px 0;", "About" }
                SettingRow { label: "Version".to_string(), value: version.to_string() }
                p { style: "color: #64748B; font-size: 13px; margin: 12px 0 0 0;",
                    "Settings are read from the config file and the STOCKROOM_API_URL, STOCKROOM_TIMEOUT_SECS and STOCKROOM_LOG environment variables."
                }
            }
        }
    }
}

#[component]
fn SettingRow(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; gap: 16px; padding: 8px 0; border-bottom: 1px solid #F8FAFC;",
            span { style: "color: #64748B;", "{label}" }
            span { style: "font-family: monospace; word-break: break-all; text-align: right;", "{value}" }
        }
    }
}
