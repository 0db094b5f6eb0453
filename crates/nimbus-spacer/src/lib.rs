//! Spacer clients and data models for the Nimbus platform.
//!
//! The spacer service (`/api/spacer/v1`) hosts the collaborative
//! workspace resources: spaces, notebooks, documents, assignments,
//! courses, exercises and datasets. [`SpacerClient`] aggregates one
//! client per resource family over a single shared configuration cell.

#![deny(missing_docs)]

pub mod assignments;
pub mod client;
pub mod courses;
pub mod datasets;
pub mod documents;
pub mod exercises;
pub mod models;
pub mod notebooks;
pub mod spaces;

pub use assignments::AssignmentsClient;
pub use client::SpacerClient;
pub use courses::CoursesClient;
pub use datasets::DatasetsClient;
pub use documents::DocumentsClient;
pub use exercises::ExercisesClient;
pub use notebooks::NotebooksClient;
pub use spaces::SpacesClient;

/// Convenient result alias that reuses the shared Nimbus error type.
pub type Result<T> = nimbus_core::Result<T>;
