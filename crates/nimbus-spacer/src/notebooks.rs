//! Notebooks client.

use crate::models::{
    CloneNotebookRequest, CreateNotebookRequest, NotebookResponse, UpdateNotebookModelRequest,
    UpdateNotebookRequest,
};
use crate::Result;
use nimbus_core::{ApiClient, ConfigHandle, QueryParams};

const BASE_PATH: &str = "/api/spacer/v1/notebooks";

/// Client for notebooks.
#[derive(Debug, Clone)]
pub struct NotebooksClient {
    inner: ApiClient,
}

impl NotebooksClient {
    /// Create a client over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            inner: ApiClient::new(config),
        }
    }

    /// Create a new notebook.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn create_notebook(
        &self,
        request: &CreateNotebookRequest,
    ) -> Result<NotebookResponse> {
        self.inner.post(BASE_PATH, Some(request), QueryParams::new()).await
    }

    /// Fetch a notebook by ID.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_notebook(&self, id: &str) -> Result<NotebookResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/{id}"), QueryParams::new())
            .await
    }

    /// Update notebook metadata.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_notebook(
        &self,
        id: &str,
        request: &UpdateNotebookRequest,
    ) -> Result<NotebookResponse> {
        self.inner
            .put(&format!("{BASE_PATH}/{id}"), Some(request), QueryParams::new())
            .await
    }

    /// Replace a notebook's content model.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_notebook_model(
        &self,
        id: &str,
        request: &UpdateNotebookModelRequest,
    ) -> Result<NotebookResponse> {
        self.inner
            .put(
                &format!("{BASE_PATH}/{id}/model"),
                Some(request),
                QueryParams::new(),
            )
            .await
    }

    /// Clone a notebook.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn clone_notebook(
        &self,
        id: &str,
        request: &CloneNotebookRequest,
    ) -> Result<NotebookResponse> {
        self.inner
            .post(
                &format!("{BASE_PATH}/{id}/clone"),
                Some(request),
                QueryParams::new(),
            )
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
    async fn clone_notebook_posts_to_clone_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/spacer/v1/notebooks/n1/clone"))
            .and(body_json(json!({"name": "copy of analysis"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "notebook": {"id": "n2", "name": "copy of analysis"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotebooksClient::new(ConfigHandle::new(RequestConfig::new(server.uri())));
        let request = CloneNotebookRequest {
            name: Some("copy of analysis".to_string()),
            space_id: None,
        };
        let response = client.clone_notebook("n1", &request).await.unwrap();
        assert_eq!(response.notebook.unwrap().id, "n2");
    }

    #[tokio::test]
    async fn update_model_puts_to_model_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/spacer/v1/notebooks/n1/model"))
            .and(body_json(json!({"model": {"cells": [{"source": "1 + 1"}]}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotebooksClient::new(ConfigHandle::new(RequestConfig::new(server.uri())));
        let request = UpdateNotebookModelRequest {
            model: json!({"cells": [{"source": "1 + 1"}]}),
        };
        let response = client.update_notebook_model("n1", &request).await.unwrap();
        assert!(response.base.success);
    }
}
