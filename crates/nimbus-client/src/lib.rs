//! Unified client for the Nimbus platform.
//!
//! [`NimbusClient`] aggregates the runtimes client and the spacer
//! composite over one shared configuration cell, and re-exports the
//! free-function IAM surface as [`iam`].
//!
//! ```no_run
//! use nimbus_client::{NimbusClient, RequestConfig};
//!
//! # async fn run() -> nimbus_client::Result<()> {
//! let client = NimbusClient::new(
//!     RequestConfig::new("https://prod1.nimbus.run").with_token("your-api-token"),
//! );
//!
//! let environments = client.runtimes.get_environments().await?;
//! let spaces = client.spacer.spaces.get_user_spaces().await?;
//!
//! // IAM endpoints share the same configuration cell and executor.
//! let me = nimbus_client::iam::users::whoami(client.config_handle()).await?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub use nimbus_core::{
    ApiClient, ApiError, BaseResponse, ConfigHandle, ConfigUpdate, Error, QueryParams,
    RequestConfig, RequestOptions, Result,
};
pub use nimbus_iam as iam;
pub use nimbus_runtimes::RuntimesClient;
pub use nimbus_spacer::SpacerClient;

/// Top-level composite client.
///
/// Owns the runtimes client and the spacer composite, all constructed
/// from the same configuration cell. [`NimbusClient::update_config`]
/// mutates that cell in place, so every sub-client — however deeply
/// nested — observes the new values on its next call.
#[derive(Debug, Clone)]
pub struct NimbusClient {
    config: ConfigHandle,
    /// Compute runtime lifecycle client.
    pub runtimes: RuntimesClient,
    /// Collaborative workspace composite.
    pub spacer: SpacerClient,
}

impl NimbusClient {
    /// Create a client, wrapping the configuration in a fresh shared
    /// cell.
    ///
    /// No validation happens here; a missing `base_url` surfaces on the
    /// first request attempt.
    #[must_use]
    pub fn new(config: RequestConfig) -> Self {
        Self::from_handle(ConfigHandle::new(config))
    }

    /// Create a client over an existing configuration cell.
    #[must_use]
    pub fn from_handle(config: ConfigHandle) -> Self {
        Self {
            runtimes: RuntimesClient::new(config.clone()),
            spacer: SpacerClient::new(config.clone()),
            config,
        }
    }

    /// The shared configuration cell, for the free-function IAM surface.
    #[must_use]
    pub fn config_handle(&self) -> &ConfigHandle {
        &self.config
    }

    /// Copy of the current configuration. Mutating the copy does not
    /// affect the client.
    #[must_use]
    pub fn get_config(&self) -> RequestConfig {
        self.config.snapshot()
    }

    /// Merge the given fields into the shared configuration cell and
    /// forward the same partial to the spacer composite's own update
    /// path. The cell is mutated in place, never replaced.
    pub fn update_config(&self, update: ConfigUpdate) {
        self.config.update(update.clone());
        self.spacer.update_config(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn environment_listing_sends_bearer_and_accept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/runtimes/v1/environments"))
            .and(header("Authorization", "Bearer abc"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "environments": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = NimbusClient::new(RequestConfig::new(server.uri()).with_token("abc"));
        let response = client.runtimes.get_environments().await.unwrap();
        assert!(response.base.success);
    }

    #[tokio::test]
    async fn update_config_reaches_every_nested_client() {
        let server = MockServer::start().await;
        Mock::given(header("Authorization", "Bearer t2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(3)
            .mount(&server)
            .await;

        let client = NimbusClient::new(RequestConfig::new(server.uri()).with_token("t1"));
        client.update_config(ConfigUpdate::new().with_token("t2"));

        client.runtimes.get_runtimes().await.unwrap();
        client.spacer.spaces.get_user_spaces().await.unwrap();
        iam::users::get_me(client.config_handle()).await.unwrap();
    }

    #[tokio::test]
    async fn get_config_returns_shallow_copy() {
        let client = NimbusClient::new(RequestConfig::new("https://x").with_token("abc"));

        let mut copy = client.get_config();
        copy.base_url = "https://tampered".to_string();
        copy.token = None;

        let current = client.get_config();
        assert_eq!(current.base_url, "https://x");
        assert_eq!(current.token.unwrap().expose_secret(), "abc");
    }

    #[tokio::test]
    async fn missing_base_url_fails_lazily() {
        let client = NimbusClient::new(RequestConfig::default());
        let err = client.runtimes.ping().await.unwrap_err();
        assert!(err.is_transport());
    }
}
