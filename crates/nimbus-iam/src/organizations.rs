//! Organizations: CRUD, membership, member roles and teams.

use crate::teams::Team;
use crate::Result;
use nimbus_core::{execute, BaseResponse, ConfigHandle, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const BASE_PATH: &str = "/api/iam/v1/organizations";

/// An organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    /// Organization ID.
    pub id: String,
    /// Organization name.
    pub name: String,
    /// Unique handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Organization type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Request body for [`create_organization`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrganizationRequest {
    /// Organization name.
    pub name: String,
    /// Unique handle.
    pub handle: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Organization type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Request body for [`update_organization`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrganizationRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Response envelope for a single organization.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The organization, when the operation returned one.
    #[serde(default)]
    pub organization: Option<Organization>,
}

/// Response envelope for organization listings.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationsResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Organizations visible to the caller.
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

/// Response envelope for the teams of an organization.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationTeamsResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Teams in the organization.
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// List the current user's organizations.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_organizations(config: &ConfigHandle) -> Result<OrganizationsResponse> {
    execute(config, BASE_PATH, RequestOptions::<()>::default()).await
}

/// Create a new organization.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn create_organization(
    config: &ConfigHandle,
    request: &CreateOrganizationRequest,
) -> Result<OrganizationResponse> {
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

/// Get an organization by ID.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_organization(config: &ConfigHandle, id: &str) -> Result<OrganizationResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{id}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Update an organization.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_organization(
    config: &ConfigHandle,
    id: &str,
    request: &UpdateOrganizationRequest,
) -> Result<OrganizationResponse> {
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

/// List organizations of the given type.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_organizations_by_type(
    config: &ConfigHandle,
    kind: &str,
) -> Result<OrganizationsResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/types/{kind}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Add a member to an organization.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn add_member(
    config: &ConfigHandle,
    organization_id: &str,
    user_id: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{organization_id}/members/{user_id}"),
        RequestOptions::<()> {
            method: Method::POST,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Remove a member from an organization.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn remove_member(
    config: &ConfigHandle,
    organization_id: &str,
    user_id: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{organization_id}/members/{user_id}"),
        RequestOptions::<()> {
            method: Method::DELETE,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Grant a role to an organization member.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn add_member_role(
    config: &ConfigHandle,
    organization_id: &str,
    user_id: &str,
    role: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{organization_id}/members/{user_id}/roles/{role}"),
        RequestOptions::<()> {
            method: Method::POST,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Revoke a role from an organization member.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn remove_member_role(
    config: &ConfigHandle,
    organization_id: &str,
    user_id: &str,
    role: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{organization_id}/members/{user_id}/roles/{role}"),
        RequestOptions::<()> {
            method: Method::DELETE,
            ..RequestOptions::default()
        },
    )
    .await
}

/// List the teams of an organization.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_teams(
    config: &ConfigHandle,
    organization_id: &str,
) -> Result<OrganizationTeamsResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{organization_id}/teams"),
        RequestOptions::<()>::default(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::RequestConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_organization_round_trips() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/iam/v1/organizations"))
            .and(body_json(json!({"name": "Acme", "handle": "acme", "type": "company"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "organization": {"id": "o1", "name": "Acme", "handle": "acme", "type": "company"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ConfigHandle::new(RequestConfig::new(server.uri()));
        let request = CreateOrganizationRequest {
            name: "Acme".to_string(),
            handle: "acme".to_string(),
            description: None,
            kind: Some("company".to_string()),
        };
        let response = create_organization(&config, &request).await.unwrap();
        let organization = response.organization.unwrap();
        assert_eq!(organization.id, "o1");
        assert_eq!(organization.kind.as_deref(), Some("company"));
    }

    #[tokio::test]
    async fn member_role_path_nests_members_and_roles() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/iam/v1/organizations/o1/members/u1/roles/owner"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ConfigHandle::new(RequestConfig::new(server.uri()));
        assert!(add_member_role(&config, "o1", "u1", "owner")
            .await
            .unwrap()
            .success);
    }
}
