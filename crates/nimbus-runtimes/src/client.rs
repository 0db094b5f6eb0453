//! Asynchronous runtimes client.

use crate::models::{
    CreateRuntimeRequest, CreateSnapshotRequest, EnvironmentsResponse, RuntimeResponse,
    RuntimesResponse, SnapshotResponse, SnapshotsResponse, UpdateRuntimeRequest,
    UpdateSnapshotRequest,
};
use crate::Result;
use nimbus_core::{ApiClient, BaseResponse, ConfigHandle, QueryParams};
use secrecy::ExposeSecret;

const BASE_PATH: &str = "/api/runtimes/v1";

/// Client for the runtime lifecycle service.
///
/// Adds endpoint paths and payload shapes only; every call funnels through
/// the shared executor in `nimbus-core`.
#[derive(Debug, Clone)]
pub struct RuntimesClient {
    inner: ApiClient,
}

impl RuntimesClient {
    /// Create a client over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            inner: ApiClient::new(config),
        }
    }

    /// List environments available for provisioning.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_environments(&self) -> Result<EnvironmentsResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/environments"), QueryParams::new())
            .await
    }

    /// Provision a new runtime.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn create_runtime(&self, request: &CreateRuntimeRequest) -> Result<RuntimeResponse> {
        self.inner
            .post(&format!("{BASE_PATH}/runtimes"), Some(request), QueryParams::new())
            .await
    }

    /// List runtimes owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_runtimes(&self) -> Result<RuntimesResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/runtimes"), QueryParams::new())
            .await
    }

    /// Fetch a runtime by pod name.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_runtime(&self, pod_name: &str) -> Result<RuntimeResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/runtimes/{pod_name}"), QueryParams::new())
            .await
    }

    /// Update a runtime, typically to restore it from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_runtime(
        &self,
        pod_name: &str,
        request: &UpdateRuntimeRequest,
    ) -> Result<BaseResponse> {
        self.inner
            .put(
                &format!("{BASE_PATH}/runtimes/{pod_name}"),
                Some(request),
                QueryParams::new(),
            )
            .await
    }

    /// Delete a runtime, with an optional reason recorded by the service.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn delete_runtime(
        &self,
        pod_name: &str,
        reason: Option<&str>,
    ) -> Result<BaseResponse> {
        let mut query = QueryParams::new();
        query.push_opt("reason", reason);
        self.inner
            .delete(&format!("{BASE_PATH}/runtimes/{pod_name}"), query)
            .await
    }

    /// List runtime snapshots owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_snapshots(&self) -> Result<SnapshotsResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/runtime-snapshots"), QueryParams::new())
            .await
    }

    /// Snapshot a running runtime.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn create_snapshot(
        &self,
        request: &CreateSnapshotRequest,
    ) -> Result<SnapshotResponse> {
        self.inner
            .post(
                &format!("{BASE_PATH}/runtime-snapshots"),
                Some(request),
                QueryParams::new(),
            )
            .await
    }

    /// Fetch a snapshot by ID.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_snapshot(&self, id: &str) -> Result<SnapshotResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/runtime-snapshots/{id}"), QueryParams::new())
            .await
    }

    /// Update snapshot metadata.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_snapshot(
        &self,
        id: &str,
        request: &UpdateSnapshotRequest,
    ) -> Result<SnapshotResponse> {
        self.inner
            .patch(
                &format!("{BASE_PATH}/runtime-snapshots/{id}"),
                Some(request),
                QueryParams::new(),
            )
            .await
    }

    /// Delete a snapshot.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn delete_snapshot(&self, id: &str) -> Result<BaseResponse> {
        self.inner
            .delete(&format!("{BASE_PATH}/runtime-snapshots/{id}"), QueryParams::new())
            .await
    }

    /// Direct download URL for a snapshot, with the current token inlined.
    #[must_use]
    pub fn snapshot_download_url(&self, id: &str) -> String {
        let config = self.inner.config().snapshot();
        let token = config
            .token
            .as_ref()
            .map(|token| token.expose_secret().to_owned())
            .unwrap_or_default();
        format!(
            "{}{BASE_PATH}/runtime-snapshots/{id}?download=1&token={token}",
            config.base_url
        )
    }

    /// Health check.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn ping(&self) -> Result<BaseResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/ping"), QueryParams::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::RequestConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer, token: Option<&str>) -> RuntimesClient {
        let mut config = RequestConfig::new(server.uri());
        if let Some(token) = token {
            config = config.with_token(token);
        }
        RuntimesClient::new(ConfigHandle::new(config))
    }

    #[tokio::test]
    async fn environment_listing_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/runtimes/v1/environments"))
            .and(header("Authorization", "Bearer abc"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "environments": [
                    {"name": "python-cpu", "display_name": "Python (CPU)", "available": true}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, Some("abc"));
        let response = client.get_environments().await.unwrap();
        assert!(response.base.success);
        assert_eq!(response.environments.len(), 1);
        assert_eq!(response.environments[0].name, "python-cpu");
    }

    #[tokio::test]
    async fn create_runtime_posts_request_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/runtimes/v1/runtimes"))
            .and(body_json(json!({
                "environment_name": "python-cpu",
                "credits_limit": 5.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "runtime": {"id": "01J0A", "pod_name": "runtime-x", "status": "starting"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, None);
        let request = CreateRuntimeRequest {
            environment_name: "python-cpu".to_string(),
            kind: None,
            given_name: None,
            credits_limit: 5.0,
            capabilities: None,
            from: None,
        };
        let response = client.create_runtime(&request).await.unwrap();
        assert_eq!(response.runtime.unwrap().pod_name, "runtime-x");
    }

    #[tokio::test]
    async fn delete_runtime_sends_reason_query() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/runtimes/v1/runtimes/runtime-x"))
            .and(query_param("reason", "credits exhausted"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, None);
        let response = client
            .delete_runtime("runtime-x", Some("credits exhausted"))
            .await
            .unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    async fn update_snapshot_uses_patch() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/runtimes/v1/runtime-snapshots/01SNAP"))
            .and(body_json(json!({"name": "before-upgrade"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "snapshot": {"id": "01SNAP", "name": "before-upgrade"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, None);
        let request = UpdateSnapshotRequest {
            name: Some("before-upgrade".to_string()),
            description: None,
        };
        let response = client.update_snapshot("01SNAP", &request).await.unwrap();
        assert_eq!(
            response.snapshot.unwrap().name.as_deref(),
            Some("before-upgrade")
        );
    }

    #[tokio::test]
    async fn missing_runtime_surfaces_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/runtimes/v1/runtimes/ghost"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"success": false, "message": "runtime not found"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server, None);
        let err = client.get_runtime("ghost").await.unwrap_err();
        let api = err.as_api().expect("application error");
        assert_eq!(api.status.as_u16(), 404);
        assert_eq!(api.message, "runtime not found");
    }

    #[tokio::test]
    async fn snapshot_download_url_inlines_token() {
        let server = MockServer::start().await;
        let client = test_client(&server, Some("tok"));
        let url = client.snapshot_download_url("01SNAP");
        assert_eq!(
            url,
            format!(
                "{}/api/runtimes/v1/runtime-snapshots/01SNAP?download=1&token=tok",
                server.uri()
            )
        );
    }
}
