//! API tokens: list, create, inspect, update and delete.

use crate::Result;
use chrono::{DateTime, Utc};
use nimbus_core::{execute, BaseResponse, ConfigHandle, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const BASE_PATH: &str = "/api/iam/v1/tokens";

/// An API token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// Token ID.
    pub id: String,
    /// Token name.
    pub name: String,
    /// The secret value. Only returned on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// When the token was last used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
    /// Granted scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

/// Request body for [`create_token`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTokenRequest {
    /// Token name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Requested scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

/// Request body for [`update_token`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTokenRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

/// Response envelope for a single token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The token, when the operation returned one.
    #[serde(default)]
    pub token: Option<Token>,
}

/// Response envelope for token listings.
#[derive(Debug, Clone, Deserialize)]
pub struct TokensResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Tokens owned by the caller.
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// List the current user's tokens.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_tokens(config: &ConfigHandle) -> Result<TokensResponse> {
    execute(config, BASE_PATH, RequestOptions::<()>::default()).await
}

/// Create a new API token. The secret value is only present in this
/// response.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn create_token(
    config: &ConfigHandle,
    request: &CreateTokenRequest,
) -> Result<TokenResponse> {
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

/// Get a token by ID.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_token(config: &ConfigHandle, id: &str) -> Result<TokenResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{id}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Update a token.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_token(
    config: &ConfigHandle,
    id: &str,
    request: &UpdateTokenRequest,
) -> Result<TokenResponse> {
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

/// Delete a token.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn delete_token(config: &ConfigHandle, id: &str) -> Result<BaseResponse> {
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
