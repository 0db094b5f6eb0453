//! Documents client.
//!
//! Documents live under the `lexicals` wire resource.

use crate::models::{
    CloneDocumentRequest, CreateDocumentRequest, DocumentResponse, UpdateDocumentModelRequest,
    UpdateDocumentRequest,
};
use crate::Result;
use nimbus_core::{ApiClient, ConfigHandle, QueryParams};

const BASE_PATH: &str = "/api/spacer/v1/lexicals";

/// Client for rich-text documents.
#[derive(Debug, Clone)]
pub struct DocumentsClient {
    inner: ApiClient,
}

impl DocumentsClient {
    /// Create a client over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            inner: ApiClient::new(config),
        }
    }

    /// Create a new document.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn create_document(
        &self,
        request: &CreateDocumentRequest,
    ) -> Result<DocumentResponse> {
        self.inner.post(BASE_PATH, Some(request), QueryParams::new()).await
    }

    /// Fetch a document by ID.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_document(&self, id: &str) -> Result<DocumentResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/{id}"), QueryParams::new())
            .await
    }

    /// Update document metadata.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_document(
        &self,
        id: &str,
        request: &UpdateDocumentRequest,
    ) -> Result<DocumentResponse> {
        self.inner
            .put(&format!("{BASE_PATH}/{id}"), Some(request), QueryParams::new())
            .await
    }

    /// Replace a document's content model.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_document_model(
        &self,
        id: &str,
        request: &UpdateDocumentModelRequest,
    ) -> Result<DocumentResponse> {
        self.inner
            .put(
                &format!("{BASE_PATH}/{id}/model"),
                Some(request),
                QueryParams::new(),
            )
            .await
    }

    /// Clone a document.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn clone_document(
        &self,
        id: &str,
        request: &CloneDocumentRequest,
    ) -> Result<DocumentResponse> {
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
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn documents_use_the_lexicals_resource() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/spacer/v1/lexicals/d1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "document": {"id": "d1", "name": "notes"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DocumentsClient::new(ConfigHandle::new(RequestConfig::new(server.uri())));
        let response = client.get_document("d1").await.unwrap();
        assert_eq!(response.document.unwrap().name, "notes");
    }
}
