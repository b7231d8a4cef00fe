// Dioxus desktop UI
pub mod app;
pub mod components;
pub mod state;
pub mod views;

pub use app::App;
pub use state::{AppState, Screen};
