//! Courses client.

use crate::models::{CourseResponse, CoursesResponse, UpdateCourseRequest};
use crate::Result;
use nimbus_core::{ApiClient, ConfigHandle, QueryParams};

const BASE_PATH: &str = "/api/spacer/v1/courses";

/// Client for courses.
#[derive(Debug, Clone)]
pub struct CoursesClient {
    inner: ApiClient,
}

impl CoursesClient {
    /// Create a client over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            inner: ApiClient::new(config),
        }
    }

    /// Fetch a course by ID.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_course(&self, id: &str) -> Result<CourseResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/{id}"), QueryParams::new())
            .await
    }

    /// Update a course by ID.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn update_course(
        &self,
        id: &str,
        request: &UpdateCourseRequest,
    ) -> Result<CourseResponse> {
        self.inner
            .put(&format!("{BASE_PATH}/{id}"), Some(request), QueryParams::new())
            .await
    }

    /// List the current user's course enrollments.
    ///
    /// # Errors
    ///
    /// Returns the shared error taxonomy of the executor.
    pub async fn get_user_course_enrollments(&self) -> Result<CoursesResponse> {
        self.inner
            .get(&format!("{BASE_PATH}/enrollments/me"), QueryParams::new())
            .await
    }
}
