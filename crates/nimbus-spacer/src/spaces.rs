//! Spaces client.

use crate::models::{CreateSpaceRequest, SpaceResponse, SpacesResponse, UpdateSpaceRequest};
use crate::Result;
use nimbus_core::{ApiClient, ConfigHandle, QueryParams};

const BASE_PATH: &str = "/api/spacer/v1/spaces";

/// Client for collaborative spaces.
#[derive(Debug, Clone)]
pub struct SpacesClient {
    inner: ApiClient,
}

impl SpacesClient {
    /// Create a client over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            inner: ApiClient::new(config),
        }
    }

    /// Create a new space.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn create_space(&self, request: &CreateSpaceRequest) -> Result<SpaceResponse> {
        self.inner.post(BASE_PATH, Some(request), QueryParams::new()).await
    }

    /// Update a space by ID.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_space(
        &self,
        id: &str,
        request: &UpdateSpaceRequest,
    ) -> Result<SpaceResponse> {
        self.inner
            .put(&format!("{BASE_PATH}/{id}"), Some(request), QueryParams::new())
            .await
    }

    /// List the current user's spaces.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_user_spaces(&self) -> Result<SpacesResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/users/me"), QueryParams::new())
            .await
    }

    /// List spaces of the given type.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_spaces_by_type(&self, kind: &str) -> Result<SpacesResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/types/{kind}"), QueryParams::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::RequestConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_space_posts_to_collection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/spacer/v1/spaces"))
            .and(body_json(json!({"name": "research"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "space": {"id": "s1", "name": "research"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpacesClient::new(ConfigHandle::new(RequestConfig::new(server.uri())));
        let request = CreateSpaceRequest {
            name: "research".to_string(),
            description: None,
            kind: None,
        };
        let response = client.create_space(&request).await.unwrap();
        assert_eq!(response.space.unwrap().id, "s1");
    }

    #[tokio::test]
    async fn spaces_by_type_hits_typed_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/spacer/v1/spaces/types/course"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "spaces": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpacesClient::new(ConfigHandle::new(RequestConfig::new(server.uri())));
        let response = client.get_spaces_by_type("course").await.unwrap();
        assert!(response.spaces.is_empty());
    }
}
