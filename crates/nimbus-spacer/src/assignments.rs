//! Assignments client.

use crate::models::{
    AssignmentResponse, CreateAssignmentRequest, GradeAssignmentRequest, ResetAssignmentRequest,
};
use crate::Result;
use nimbus_core::{ApiClient, BaseResponse, ConfigHandle, QueryParams};

const BASE_PATH: &str = "/api/spacer/v1/assignments";

/// Client for course assignments.
#[derive(Debug, Clone)]
pub struct AssignmentsClient {
    inner: ApiClient,
}

impl AssignmentsClient {
    /// Create a client over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            inner: ApiClient::new(config),
        }
    }

    /// Create a new assignment.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn create_assignment(
        &self,
        request: &CreateAssignmentRequest,
    ) -> Result<AssignmentResponse> {
        self.inner.post(BASE_PATH, Some(request), QueryParams::new()).await
    }

    /// Fetch an assignment by ID.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_assignment(&self, id: &str) -> Result<AssignmentResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/{id}"), QueryParams::new())
            .await
    }

    /// Grade a student's work on an assignment.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn grade_assignment(
        &self,
        id: &str,
        student_id: &str,
        request: &GradeAssignmentRequest,
    ) -> Result<BaseResponse> {
        self.inner
            .put(
                &format!("{BASE_PATH}/{id}/students/{student_id}/grade"),
                Some(request),
                QueryParams::new(),
            )
            .await
    }

    /// Reset an assignment.
    ///
    /// A missing request resets with no recorded reason.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn reset_assignment(
        &self,
        id: &str,
        request: Option<&ResetAssignmentRequest>,
    ) -> Result<BaseResponse> {
        let default = ResetAssignmentRequest::default();
        self.inner
            .post(
                &format!("{BASE_PATH}/{id}/reset"),
                Some(request.unwrap_or(&default)),
                QueryParams::new(),
            )
            .await
    }
}
