//! Teams: CRUD, membership and member roles.

use crate::Result;
use nimbus_core::{execute, BaseResponse, ConfigHandle, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const BASE_PATH: &str = "/api/iam/v1/teams";

/// A team within an organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    /// Team ID.
    pub id: String,
    /// Team name.
    pub name: String,
    /// Unique handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

/// Request body for [`create_team`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    /// Team name.
    pub name: String,
    /// Unique handle.
    pub handle: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning organization.
    pub organization_id: String,
}

/// Request body for [`update_team`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTeamRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response envelope for a single team.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The team, when the operation returned one.
    #[serde(default)]
    pub team: Option<Team>,
}

/// Create a new team.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn create_team(config: &ConfigHandle, request: &CreateTeamRequest) -> Result<TeamResponse> {
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

/// Get a team by ID.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_team(config: &ConfigHandle, id: &str) -> Result<TeamResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{id}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Update a team.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_team(
    config: &ConfigHandle,
    id: &str,
    request: &UpdateTeamRequest,
) -> Result<TeamResponse> {
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

/// Add a member to a team.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn add_member(
    config: &ConfigHandle,
    team_id: &str,
    user_id: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{team_id}/members/{user_id}"),
        RequestOptions::<()> {
            method: Method::POST,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Remove a member from a team.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn remove_member(
    config: &ConfigHandle,
    team_id: &str,
    user_id: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{team_id}/members/{user_id}"),
        RequestOptions::<()> {
            method: Method::DELETE,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Grant a role to a team member.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn add_member_role(
    config: &ConfigHandle,
    team_id: &str,
    user_id: &str,
    role: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{team_id}/members/{user_id}/roles/{role}"),
        RequestOptions::<()> {
            method: Method::POST,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Revoke a role from a team member.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn remove_member_role(
    config: &ConfigHandle,
    team_id: &str,
    user_id: &str,
    role: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{team_id}/members/{user_id}/roles/{role}"),
        RequestOptions::<()> {
            method: Method::DELETE,
            ..RequestOptions::default()
        },
    )
    .await
}
