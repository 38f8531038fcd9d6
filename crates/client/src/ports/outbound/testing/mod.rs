//! Test doubles for outbound ports
//!
//! ```ignore
//! use crate::ports::outbound::testing::MockRawApi;
//! ```

#[cfg(test)]
mockall::mock! {
    pub RawApi {}

    #[async_trait::async_trait]
    impl crate::ports::outbound::RawApiPort for RawApi {
        async fn get_json(
            &self,
            path: &str,
        ) -> Result<serde_json::Value, crate::ports::outbound::NetworkError>;

        async fn post_no_response_json(
            &self,
            path: &str,
            body: &serde_json::Value,
        ) -> Result<(), crate::ports::outbound::NetworkError>;
    }
}
