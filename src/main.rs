use std::any::Any;

use anyhow::{Context, Result};
use dioxus_desktop::{Config, WindowBuilder};
use stockroom::config::AppConfig;
use stockroom::repository::Repository;
use stockroom::services::ProductService;
use stockroom::ui_dioxus::{App, AppState};

fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    tracing::info!(
        api = %config.api_base_url,
        timeout_secs = config.timeout_seconds,
        "Starting Stockroom"
    );

    let repository = Repository::http(&config).context("Failed to build HTTP client")?;
    let service = ProductService::from_repository(&repository);
    let state = AppState::new(service, config);

    let window = WindowBuilder::new()
        .with_title("Stockroom")
        .with_inner_size(dioxus_desktop::LogicalSize::new(1100.0, 800.0));

    // Shared state is handed to the root component as context
    let contexts: Vec<Box<dyn Fn() -> Box<dyn Any> + Send + Sync>> =
        vec![Box::new(move || Box::new(state.clone()) as Box<dyn Any>)];

    dioxus_desktop::launch::launch(App, contexts, Config::new().with_window(window));

    Ok(())
}
