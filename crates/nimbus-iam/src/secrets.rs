//! Secrets: list, create, read, update and delete.

use crate::Result;
use chrono::{DateTime, Utc};
use nimbus_core::{execute, BaseResponse, ConfigHandle, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const BASE_PATH: &str = "/api/iam/v1/secrets";

/// A stored secret. The value never appears in listings; it is only
/// present on [`get_secret`] responses, as a separate field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Secret {
    /// Secret ID.
    pub id: String,
    /// Secret name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for [`create_secret`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSecretRequest {
    /// Secret name.
    pub name: String,
    /// Secret value.
    pub value: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for [`update_secret`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSecretRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response envelope for a single secret.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The secret metadata, when the operation returned one.
    #[serde(default)]
    pub secret: Option<Secret>,
    /// The secret value, on read operations.
    #[serde(default)]
    pub value: Option<String>,
}

/// Response envelope for secret listings.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretsResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Secrets owned by the caller.
    #[serde(default)]
    pub secrets: Vec<Secret>,
}

/// List the current user's secrets.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_secrets(config: &ConfigHandle) -> Result<SecretsResponse> {
    execute(config, BASE_PATH, RequestOptions::<()>::default()).await
}

/// Create a new secret.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn create_secret(
    config: &ConfigHandle,
    request: &CreateSecretRequest,
) -> Result<SecretResponse> {
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

/// Get a secret by ID, including its value.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_secret(config: &ConfigHandle, id: &str) -> Result<SecretResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{id}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Update a secret.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_secret(
    config: &ConfigHandle,
    id: &str,
    request: &UpdateSecretRequest,
) -> Result<SecretResponse> {
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

/// Delete a secret.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn delete_secret(config: &ConfigHandle, id: &str) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{id}"),
        RequestOptions::<()> {
            method: Method::DELETE,
            ..RequestOptions::default()
        },
    )
    .await
}
