//! reqwest adapter for native builds

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use super::{error_message, resolve_url};
use crate::ports::outbound::{NetworkError, RawApiPort};

/// HTTP client bound to the user API base URL
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: Url,
}

impl ApiAdapter {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, NetworkError> {
        let url = resolve_url(&self.base_url, path)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
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

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;

        ensure_success(response).await.map(|_| ())
    }
}

async fn ensure_success(response: Response) -> Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(NetworkError::HttpStatus {
        status: status.as_u16(),
        message: error_message(status.canonical_reason(), &body),
    })
}
