//! Datasets client.

use crate::models::{CreateDatasetRequest, DatasetResponse, UpdateDatasetRequest};
use crate::Result;
use nimbus_core::{ApiClient, ConfigHandle, QueryParams};

const BASE_PATH: &str = "/api/spacer/v1/datasets";

/// Client for datasets.
#[derive(Debug, Clone)]
pub struct DatasetsClient {
    inner: ApiClient,
}

impl DatasetsClient {
    /// Create a client over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            inner: ApiClient::new(config),
        }
    }

    /// Create a new dataset.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn create_dataset(&self, request: &CreateDatasetRequest) -> Result<DatasetResponse> {
        self.inner.post(BASE_PATH, Some(request), QueryParams::new()).await
    }

    /// Update a dataset by ID.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_dataset(
        &self,
        id: &str,
        request: &UpdateDatasetRequest,
    ) -> Result<DatasetResponse> {
        self.inner
            .put(&format!("{BASE_PATH}/{id}"), Some(request), QueryParams::new())
            .await
    }
}
