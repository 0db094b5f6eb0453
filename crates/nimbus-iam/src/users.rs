//! Users: profile, search, settings, roles, onboarding and outbounds.

use crate::Result;
use nimbus_core::{execute, BaseResponse, ConfigHandle, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const BASE_PATH: &str = "/api/iam/v1";

/// A platform user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User ID.
    pub id: String,
    /// Unique handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Granted roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Response envelope for a single user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The user, when the operation returned one.
    #[serde(default)]
    pub user: Option<User>,
}

/// Request body for updating the current user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Request body for [`search_users`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchUsersRequest {
    /// Search pattern.
    pub pattern: String,
    /// Maximum results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Result offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Response for [`search_users`].
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUsersResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Matching users.
    #[serde(default)]
    pub users: Vec<User>,
    /// Total matches, regardless of limit.
    #[serde(default)]
    pub total: Option<u64>,
}

/// Response envelope for user settings operations.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The settings document.
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

/// Request body for [`update_onboarding`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOnboardingRequest {
    /// Current onboarding step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    /// Whether onboarding is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Step-specific data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Response envelope for onboarding operations.
#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The onboarding document.
    #[serde(default)]
    pub onboarding: Option<serde_json::Value>,
}

/// Get the current authenticated user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_me(config: &ConfigHandle) -> Result<UserResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/me"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Update the current authenticated user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_me(config: &ConfigHandle, request: &UpdateUserRequest) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/me"),
        RequestOptions {
            method: Method::PUT,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Request an email change for the current user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn request_email_update(config: &ConfigHandle, email: &str) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/me/email"),
        RequestOptions {
            method: Method::PUT,
            body: Some(&serde_json::json!({ "email": email })),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Confirm an email change with the verification code.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn confirm_email_update(config: &ConfigHandle, code: &str) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/me/email"),
        RequestOptions {
            method: Method::POST,
            body: Some(&serde_json::json!({ "code": code })),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Get detailed information about the current authenticated user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn whoami(config: &ConfigHandle) -> Result<UserResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/whoami"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Get a user by ID.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_user(config: &ConfigHandle, id: &str) -> Result<UserResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/users/{id}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Search users by pattern.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn search_users(
    config: &ConfigHandle,
    request: &SearchUsersRequest,
) -> Result<SearchUsersResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/users/search"),
        RequestOptions {
            method: Method::POST,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Replace a user's settings document.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_user_settings(
    config: &ConfigHandle,
    user_id: &str,
    settings: &serde_json::Value,
) -> Result<SettingsResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/users/{user_id}/settings"),
        RequestOptions {
            method: Method::PUT,
            body: Some(settings),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Check whether a user has a role.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn check_user_role(
    config: &ConfigHandle,
    user_id: &str,
    role: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/users/{user_id}/roles/{role}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Grant a role to a user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn add_user_role(
    config: &ConfigHandle,
    user_id: &str,
    role: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/users/{user_id}/roles/{role}"),
        RequestOptions::<()> {
            method: Method::POST,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Revoke a role from a user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn remove_user_role(
    config: &ConfigHandle,
    user_id: &str,
    role: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/users/{user_id}/roles/{role}"),
        RequestOptions::<()> {
            method: Method::DELETE,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Get the current user's onboarding state.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_onboarding(config: &ConfigHandle) -> Result<OnboardingResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/onboardings"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Update the current user's onboarding state.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_onboarding(
    config: &ConfigHandle,
    request: &UpdateOnboardingRequest,
) -> Result<OnboardingResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/onboardings"),
        RequestOptions {
            method: Method::PUT,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Subscribe a user to outbound communications.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn subscribe_to_outbounds(config: &ConfigHandle, user_id: &str) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/outbounds/users/{user_id}"),
        RequestOptions::<()> {
            method: Method::PUT,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Unsubscribe a user from outbound communications.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn unsubscribe_from_outbounds(
    config: &ConfigHandle,
    user_id: &str,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/outbounds/users/{user_id}"),
        RequestOptions::<()> {
            method: Method::DELETE,
            ..RequestOptions::default()
        },
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
    async fn whoami_parses_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/iam/v1/whoami"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "user": {"id": "u1", "handle": "ada", "email": "ada@example.org"}
            })))
            .mount(&server)
            .await;

        let config = ConfigHandle::new(RequestConfig::new(server.uri()));
        let response = whoami(&config).await.unwrap();
        let user = response.user.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.email.as_deref(), Some("ada@example.org"));
    }

    #[tokio::test]
    async fn role_grant_and_revoke_share_the_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/iam/v1/users/u1/roles/admin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/iam/v1/users/u1/roles/admin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ConfigHandle::new(RequestConfig::new(server.uri()));
        assert!(add_user_role(&config, "u1", "admin").await.unwrap().success);
        assert!(remove_user_role(&config, "u1", "admin")
            .await
            .unwrap()
            .success);
    }

    #[tokio::test]
    async fn email_update_wraps_plain_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/iam/v1/me/email"))
            .and(body_json(json!({"email": "new@example.org"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ConfigHandle::new(RequestConfig::new(server.uri()));
        let response = request_email_update(&config, "new@example.org")
            .await
            .unwrap();
        assert!(response.success);
    }
}
