pub mod dashboard;
pub mod product_detail;
pub mod product_form;
pub mod product_list;
pub mod settings;

pub use dashboard::DashboardView;
pub use product_detail::ProductDetail;
pub use product_form::ProductFormView;
pub use product_list::ProductList;
pub use settings::SettingsView;
