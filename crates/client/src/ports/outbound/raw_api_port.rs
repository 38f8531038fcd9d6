//! Raw API Port - Object-safe HTTP boundary
//!
//! `ApiPort` is generic over request/response types, which makes it not
//! object-safe. The composition root needs something it can store behind
//! `Arc<dyn ...>`, so adapters implement this JSON-valued port instead and
//! the application layer provides a typed wrapper (`Api`) on top.
//!
//! Paths are relative to the configured base URL; an empty path addresses
//! the base URL itself.

use serde_json::Value;

use super::NetworkError;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// `GET` and decode the body as JSON. Non-2xx is an error.
    async fn get_json(&self, path: &str) -> Result<Value, NetworkError>;

    /// `POST` a JSON body. Any 2xx is success; the response body is ignored.
    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), NetworkError>;
}
