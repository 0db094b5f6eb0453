//! Runtime service models.

use chrono::{DateTime, Utc};
use nimbus_core::BaseResponse;
use serde::{Deserialize, Serialize};

/// Request body for provisioning a runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRuntimeRequest {
    /// Environment to provision from.
    pub environment_name: String,
    /// Runtime type (e.g. `notebook`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Display name chosen by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Maximum credits this runtime may consume.
    pub credits_limit: f64,
    /// Requested capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    /// Snapshot ID to restore from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Request body for updating a runtime, typically to restore a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateRuntimeRequest {
    /// Snapshot ID to restore from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// A provisioned runtime as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Runtime {
    /// Runtime ID.
    pub id: String,
    /// Pod name, the addressable identifier for lifecycle operations.
    pub pod_name: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Environment the runtime was provisioned from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    /// Runtime type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Maximum credits this runtime may consume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_limit: Option<f64>,
    /// Granted capabilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Kernel connection details (arbitrary JSON).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_connection: Option<serde_json::Value>,
}

/// Response envelope for a single runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The runtime, when the operation returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Runtime>,
}

/// Response envelope for runtime listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimesResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Runtimes owned by the caller.
    #[serde(default)]
    pub runtimes: Vec<Runtime>,
}

/// An environment available for provisioning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Environment {
    /// Environment name, used in [`CreateRuntimeRequest`].
    pub name: String,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kernel specification (arbitrary JSON).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_spec: Option<serde_json::Value>,
    /// Whether the environment can currently be provisioned.
    #[serde(default)]
    pub available: bool,
}

/// Response envelope for environment listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentsResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Available environments.
    #[serde(default)]
    pub environments: Vec<Environment>,
}

/// Request body for snapshotting a runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateSnapshotRequest {
    /// Pod name of the runtime to snapshot.
    pub pod_name: String,
    /// Snapshot name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Snapshot description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stop the runtime once the snapshot is taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<bool>,
}

/// Request body for updating snapshot metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateSnapshotRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A runtime snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeSnapshot {
    /// Snapshot ID.
    pub id: String,
    /// Snapshot name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pod name of the runtime the snapshot was taken from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_name: Option<String>,
    /// Snapshot status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Response envelope for a single snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The snapshot, when the operation returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<RuntimeSnapshot>,
}

/// Response envelope for snapshot listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotsResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Snapshots owned by the caller.
    #[serde(default)]
    pub snapshots: Vec<RuntimeSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_deserializes_with_minimal_fields() {
        let runtime: Runtime = serde_json::from_str(
            r#"{"id": "01J0ABC", "pod_name": "runtime-a1b2", "status": "running"}"#,
        )
        .unwrap();
        assert_eq!(runtime.pod_name, "runtime-a1b2");
        assert_eq!(runtime.status.as_deref(), Some("running"));
        assert!(runtime.kernel_connection.is_none());
    }

    #[test]
    fn create_request_skips_absent_fields() {
        let request = CreateRuntimeRequest {
            environment_name: "python-cpu".to_string(),
            kind: None,
            given_name: None,
            credits_limit: 10.0,
            capabilities: None,
            from: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"environment_name": "python-cpu", "credits_limit": 10.0})
        );
    }

    #[test]
    fn runtime_type_maps_to_kind() {
        let runtime: Runtime = serde_json::from_str(
            r#"{"id": "x", "pod_name": "p", "type": "notebook"}"#,
        )
        .unwrap();
        assert_eq!(runtime.kind.as_deref(), Some("notebook"));
    }

    #[test]
    fn environments_listing_defaults_to_empty() {
        let response: EnvironmentsResponse =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.base.success);
        assert!(response.environments.is_empty());
    }
}
