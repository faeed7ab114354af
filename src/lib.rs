pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use data::load_invoice_table;
pub use error::LoadError;
pub use service::DashboardService;
