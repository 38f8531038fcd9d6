//! gloo-net (browser fetch) adapter for wasm builds

use gloo_net::http::{Request, Response};
use serde_json::Value;
use url::Url;

use super::{error_message, resolve_url};
use crate::ports::outbound::{NetworkError, RawApiPort};

/// HTTP client bound to the user API base URL
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: Url,
}

impl ApiAdapter {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, NetworkError> {
        let url = resolve_url(&self.base_url, path)?;
        tracing::debug!(%url, "GET");

        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;

        ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| NetworkError::ParseError(e.to_string()))
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), NetworkError> {
        let url = resolve_url(&self.base_url, path)?;
        tracing::debug!(%url, "POST");

        let request = Request::post(url.as_str())
            .json(body)
            .map_err(|e| NetworkError::SerializeError(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;

        ensure_success(response).await.map(|_| ())
    }
}

async fn ensure_success(response: Response) -> Result<Response, NetworkError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(NetworkError::HttpStatus {
        status,
        message: error_message(Some(&status_text), &body),
    })
}
