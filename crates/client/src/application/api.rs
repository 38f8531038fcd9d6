//! Typed API wrapper for application services.
//!
//! The composition root stores an object-safe `Arc<dyn RawApiPort>` so the UI
//! and services never name an adapter type. `Api` wraps it and implements the
//! typed `ApiPort` interface via serde_json conversions.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::ports::outbound::{ApiPort, NetworkError, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetworkError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| NetworkError::ParseError(e.to_string()))
    }

    async fn post_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), NetworkError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| NetworkError::SerializeError(e.to_string()))?;
        self.raw.post_no_response_json(path, &body_value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::testing::MockRawApi;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn get_decodes_typed_value() {
        let mut raw = MockRawApi::new();
        raw.expect_get_json()
            .returning(|_| Ok(json!({ "name": "Ada" })));

        let api = Api::new(Arc::new(raw));
        let named: Named = api.get("").await.expect("decodes");

        assert_eq!(named.name, "Ada");
    }

    #[tokio::test]
    async fn get_reports_shape_mismatch_as_parse_error() {
        let mut raw = MockRawApi::new();
        raw.expect_get_json().returning(|_| Ok(json!({ "nope": 1 })));

        let api = Api::new(Arc::new(raw));
        let result: Result<Named, _> = api.get("").await;

        assert!(matches!(result, Err(NetworkError::ParseError(_))));
    }

    #[tokio::test]
    async fn post_forwards_serialized_body() {
        let mut raw = MockRawApi::new();
        raw.expect_post_no_response_json()
            .withf(|path, body| path.is_empty() && body == &json!({ "name": "Ada" }))
            .times(1)
            .returning(|_, _| Ok(()));

        let api = Api::new(Arc::new(raw));
        let body = json!({ "name": "Ada" });

        api.post_no_response("", &body).await.expect("posts");
    }
}
