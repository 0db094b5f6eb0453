//! Spacer service models: spaces, notebooks, documents, assignments,
//! courses, exercises and datasets.

use chrono::{DateTime, Utc};
use nimbus_core::BaseResponse;
use serde::{Deserialize, Serialize};

// ── Spaces ──────────────────────────────────────────────────────────────

/// A collaborative space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Space {
    /// Space ID.
    pub id: String,
    /// Space name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Space type (e.g. `default`, `course`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating a space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateSpaceRequest {
    /// Space name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Space type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Request body for updating a space.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateSpaceRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response envelope for a single space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The space, when the operation returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<Space>,
}

/// Response envelope for space listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacesResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Spaces visible to the caller.
    #[serde(default)]
    pub spaces: Vec<Space>,
}

// ── Notebooks ───────────────────────────────────────────────────────────

/// A notebook stored in a space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notebook {
    /// Notebook ID.
    pub id: String,
    /// Notebook name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Notebook content model (arbitrary JSON).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<serde_json::Value>,
    /// Owning space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating a notebook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateNotebookRequest {
    /// Notebook name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial content model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<serde_json::Value>,
    /// Owning space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
}

/// Request body for updating notebook metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateNotebookRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Move to another space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
}

/// Request body for replacing a notebook's content model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateNotebookModelRequest {
    /// Replacement content model.
    pub model: serde_json::Value,
}

/// Request body for cloning a notebook.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CloneNotebookRequest {
    /// Name of the clone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Space to clone into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
}

/// Response envelope for notebook operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotebookResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The notebook, when the operation returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook: Option<Notebook>,
}

// ── Documents ───────────────────────────────────────────────────────────

/// A rich-text document stored in a space.
///
/// The wire resource for documents is `lexicals`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Document ID.
    pub id: String,
    /// Document name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Document content model (arbitrary JSON).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<serde_json::Value>,
    /// Owning space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDocumentRequest {
    /// Document name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial content model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<serde_json::Value>,
    /// Owning space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
}

/// Request body for updating document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateDocumentRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Move to another space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
}

/// Request body for replacing a document's content model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateDocumentModelRequest {
    /// Replacement content model.
    pub model: serde_json::Value,
}

/// Request body for cloning a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CloneDocumentRequest {
    /// Name of the clone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Space to clone into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
}

/// Response envelope for document operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The document, when the operation returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
}

// ── Assignments ─────────────────────────────────────────────────────────

/// A course assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    /// Assignment ID.
    pub id: String,
    /// Assignment name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    /// Due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Maximum points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating an assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAssignmentRequest {
    /// Assignment name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    /// Due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Maximum points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
}

/// Request body for grading a student's assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradeAssignmentRequest {
    /// Grade awarded.
    pub grade: f64,
    /// Feedback for the student.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Request body for resetting an assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResetAssignmentRequest {
    /// Reason for the reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response envelope for assignment operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The assignment, when the operation returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<Assignment>,
}

// ── Courses ─────────────────────────────────────────────────────────────

/// A course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Course ID.
    pub id: String,
    /// Course name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Instructor user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<String>,
    /// Start of the course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// End of the course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for updating a course.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateCourseRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New start date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// New end date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Response envelope for a single course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The course, when the operation returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}

/// Response envelope for course listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursesResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Courses visible to the caller.
    #[serde(default)]
    pub courses: Vec<Course>,
}

// ── Exercises ───────────────────────────────────────────────────────────

/// An exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Exercise ID.
    pub id: String,
    /// Exercise name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Maximum points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// Difficulty label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating an exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateExerciseRequest {
    /// Exercise name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Maximum points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// Difficulty label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// Request body for updating an exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateExerciseRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New difficulty label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// Request body for re-pointing an exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateExercisePointsRequest {
    /// New maximum points.
    pub points: f64,
}

/// Request body for cloning an exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CloneExerciseRequest {
    /// Name of the clone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response envelope for exercise operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The exercise, when the operation returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Exercise>,
}

// ── Datasets ────────────────────────────────────────────────────────────

/// A dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    /// Dataset ID.
    pub id: String,
    /// Dataset name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dataset type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Storage format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating a dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDatasetRequest {
    /// Dataset name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dataset type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Storage format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Request body for updating a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateDatasetRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New dataset type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// New storage format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Response envelope for dataset operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The dataset, when the operation returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Dataset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_type_maps_to_kind() {
        let space: Space =
            serde_json::from_str(r#"{"id": "s1", "name": "home", "type": "default"}"#).unwrap();
        assert_eq!(space.kind.as_deref(), Some("default"));
    }

    #[test]
    fn notebook_model_is_arbitrary_json() {
        let notebook: Notebook = serde_json::from_str(
            r#"{"id": "n1", "name": "analysis.ipynb", "model": {"cells": []}}"#,
        )
        .unwrap();
        assert_eq!(notebook.model.unwrap()["cells"], serde_json::json!([]));
    }

    #[test]
    fn update_requests_serialize_sparsely() {
        let request = UpdateSpaceRequest {
            name: Some("renamed".to_string()),
            description: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"name": "renamed"})
        );
    }

    #[test]
    fn assignment_timestamps_parse() {
        let assignment: Assignment = serde_json::from_str(
            r#"{"id": "a1", "name": "hw1", "due_date": "2025-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(assignment.due_date.unwrap().timestamp(), 1_740_830_400);
    }
}
