mod app;
mod client;
mod config;
pub mod twitter;

pub use app::App;
pub use client::ApiClient;
pub use config::Config;
