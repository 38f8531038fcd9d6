//! Client configuration
//!
//! The only setting is the user API base URL, read once at startup from
//! `USERDESK_API_URL`. Native builds also load a `.env` file; wasm builds
//! bake the value in at compile time.

use thiserror::Error;
use url::Url;

/// Environment variable holding the user API base URL.
pub const API_URL_ENV: &str = "USERDESK_API_URL";

/// Used when `USERDESK_API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/users";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("USERDESK_API_URL is not a valid URL ({value}): {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("USERDESK_API_URL must use http or https, got {scheme}://")]
    UnsupportedScheme { scheme: String },
}

/// Configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the user collection (`GET` lists, `POST` creates)
    pub api_url: Url,
}

impl ClientConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(read_api_url())
    }

    /// Build configuration from an optional raw URL.
    pub fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        let raw = match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => {
                tracing::warn!(default = DEFAULT_API_URL, "{API_URL_ENV} not set, using default");
                DEFAULT_API_URL.to_string()
            }
        };

        let api_url = Url::parse(&raw).map_err(|source| ConfigError::InvalidApiUrl {
            value: raw.clone(),
            source,
        })?;

        match api_url.scheme() {
            "http" | "https" => Ok(Self { api_url }),
            other => Err(ConfigError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_api_url() -> Option<String> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();
    std::env::var(API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn read_api_url() -> Option<String> {
    option_env!("USERDESK_API_URL").map(str::to_string)
}
