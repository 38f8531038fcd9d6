//! HTTP adapters for `RawApiPort`
//!
//! Platform-specific implementations are in submodules:
//! - `desktop`: reqwest based client
//! - `wasm`: gloo-net (browser fetch) based client
//!
//! Both share URL resolution and error-message shaping from here. No
//! timeout or retry is applied.

use url::Url;

use crate::ports::outbound::NetworkError;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

/// Maximum number of error body characters carried in a `NetworkError`.
const MAX_ERROR_CHARS: usize = 200;

/// Resolve `path` against the base URL. An empty path is the base itself.
pub(crate) fn resolve_url(base: &Url, path: &str) -> Result<Url, NetworkError> {
    if path.is_empty() {
        return Ok(base.clone());
    }
    base.join(path)
        .map_err(|e| NetworkError::InvalidUrl(format!("{base} + {path}: {e}")))
}

/// Message for a non-2xx response: the (truncated) body, or the reason phrase.
pub(crate) fn error_message(reason: Option<&str>, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return reason.unwrap_or("Request failed").to_string();
    }
    body.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:8000/users").expect("valid url")
    }

    #[test]
    fn empty_path_is_the_base_url() {
        assert_eq!(resolve_url(&base(), "").expect("resolves"), base());
    }

    #[test]
    fn relative_path_joins_base() {
        let url = resolve_url(&base(), "/health").expect("resolves");
        assert_eq!(url.as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn error_message_prefers_body_and_truncates() {
        assert_eq!(error_message(Some("Bad Request"), ""), "Bad Request");
        assert_eq!(error_message(None, "  "), "Request failed");
        assert_eq!(error_message(Some("Bad Request"), "email taken"), "email taken");

        let long = "x".repeat(500);
        assert_eq!(error_message(None, &long).len(), MAX_ERROR_CHARS);
    }
}
