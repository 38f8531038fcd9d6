pub mod config;
pub mod http_client;

pub use config::{ClientConfig, ConfigError};
pub use http_client::ApiAdapter;
