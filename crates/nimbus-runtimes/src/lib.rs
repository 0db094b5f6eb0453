//! Runtimes client and data models for the Nimbus platform.
//!
//! Provides typed structures and an asynchronous client for the compute
//! runtime lifecycle service (`/api/runtimes/v1`): environments, runtimes
//! and runtime snapshots.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::RuntimesClient;
pub use models::{
    CreateRuntimeRequest, CreateSnapshotRequest, Environment, EnvironmentsResponse, Runtime,
    RuntimeResponse, RuntimeSnapshot, RuntimesResponse, SnapshotResponse, SnapshotsResponse,
    UpdateRuntimeRequest, UpdateSnapshotRequest,
};

/// Convenient result alias that reuses the shared Nimbus error type.
pub type Result<T> = nimbus_core::Result<T>;
