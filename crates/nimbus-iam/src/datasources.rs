//! Datasources: list, create, read and update.

use crate::Result;
use chrono::{DateTime, Utc};
use nimbus_core::{execute, BaseResponse, ConfigHandle, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const BASE_PATH: &str = "/api/iam/v1/datasources";

/// An external datasource connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Datasource {
    /// Datasource ID.
    pub id: String,
    /// Datasource name.
    pub name: String,
    /// Connector type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Connector-specific configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for [`create_datasource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatasourceRequest {
    /// Datasource name.
    pub name: String,
    /// Connector type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Connector-specific configuration.
    pub config: serde_json::Value,
}

/// Request body for [`update_datasource`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDatasourceRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New connector configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

/// Response envelope for a single datasource.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasourceResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The datasource, when the operation returned one.
    #[serde(default)]
    pub datasource: Option<Datasource>,
}

/// Response envelope for datasource listings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasourcesResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Datasources owned by the caller.
    #[serde(default)]
    pub datasources: Vec<Datasource>,
}

/// List the current user's datasources.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_datasources(config: &ConfigHandle) -> Result<DatasourcesResponse> {
    execute(config, BASE_PATH, RequestOptions::<()>::default()).await
}

/// Create a new datasource.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn create_datasource(
    config: &ConfigHandle,
    request: &CreateDatasourceRequest,
) -> Result<DatasourceResponse> {
    execute(
        config,
        BASE_PATH,
        RequestOptions {
            method: Method::POST,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Get a datasource by ID.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_datasource(config: &ConfigHandle, id: &str) -> Result<DatasourceResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{id}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Update a datasource.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_datasource(
    config: &ConfigHandle,
    id: &str,
    request: &UpdateDatasourceRequest,
) -> Result<DatasourceResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{id}"),
        RequestOptions {
            method: Method::PUT,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}
