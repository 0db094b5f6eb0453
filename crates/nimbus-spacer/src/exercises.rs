//! Exercises client.

use crate::models::{
    CloneExerciseRequest, CreateExerciseRequest, ExerciseResponse, UpdateExercisePointsRequest,
    UpdateExerciseRequest,
};
use crate::Result;
use nimbus_core::{ApiClient, ConfigHandle, QueryParams};

const BASE_PATH: &str = "/api/spacer/v1/exercises";

/// Client for exercises.
#[derive(Debug, Clone)]
pub struct ExercisesClient {
    inner: ApiClient,
}

impl ExercisesClient {
    /// Create a client over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            inner: ApiClient::new(config),
        }
    }

    /// Create a new exercise.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn create_exercise(
        &self,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponse> {
        self.inner.post(BASE_PATH, Some(request), QueryParams::new()).await
    }

    /// Update an exercise by ID.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_exercise(
        &self,
        id: &str,
        request: &UpdateExerciseRequest,
    ) -> Result<ExerciseResponse> {
        self.inner
            .put(&format!("{BASE_PATH}/{id}"), Some(request), QueryParams::new())
            .await
    }

    /// Update the points of an exercise.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_exercise_points(
        &self,
        id: &str,
        request: &UpdateExercisePointsRequest,
    ) -> Result<ExerciseResponse> {
        self.inner
            .put(
                &format!("{BASE_PATH}/{id}/points"),
                Some(request),
                QueryParams::new(),
            )
            .await
    }

    /// Clone an exercise.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn clone_exercise(
        &self,
        id: &str,
        request: &CloneExerciseRequest,
    ) -> Result<ExerciseResponse> {
        self.inner
            .post(
                &format!("{BASE_PATH}/{id}/clone"),
                Some(request),
                QueryParams::new(),
            )
            .await
    }
}
