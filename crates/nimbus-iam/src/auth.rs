//! Authentication: login, logout, OAuth2, MFA, passwords and invites.

use crate::users::User;
use crate::Result;
use nimbus_core::{execute, BaseResponse, ConfigHandle, QueryParams, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const BASE_PATH: &str = "/api/iam/v1";

/// Credentials for [`login`]. Exactly one of password, token or MFA code
/// flows applies; the service decides based on the fields present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// User handle or email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Password credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Token credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// One-time MFA code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_code: Option<String>,
}

/// Response for [`login`] and [`join_with_invite`].
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The authenticated user.
    #[serde(default)]
    pub user: Option<User>,
    /// Session token to store in the configuration.
    #[serde(default)]
    pub token: Option<String>,
    /// External token, when the platform issued one.
    #[serde(default)]
    pub external_token: Option<String>,
    /// Set when the account requires an MFA code to finish logging in.
    #[serde(default)]
    pub mfa_required: Option<bool>,
}

/// Supported OAuth2 identity providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuth2Provider {
    /// GitHub.
    Github,
    /// LinkedIn.
    Linkedin,
    /// Okta.
    Okta,
}

impl OAuth2Provider {
    /// Provider name as the service expects it.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Okta => "okta",
        }
    }
}

/// Response carrying an OAuth2 authorization URL.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuth2AuthzUrlResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Authorization URL to redirect the user to.
    #[serde(default)]
    pub url: Option<String>,
}

/// Response for [`setup_mfa`].
#[derive(Debug, Clone, Deserialize)]
pub struct MfaSetupResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// QR code for enrolling an authenticator app.
    #[serde(default)]
    pub qr_code: Option<String>,
    /// Shared secret, for manual enrollment.
    #[serde(default)]
    pub secret: Option<String>,
    /// One-time backup codes.
    #[serde(default)]
    pub backup_codes: Option<Vec<String>>,
}

/// Request body for [`validate_mfa`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MfaValidateRequest {
    /// One-time code from the authenticator.
    pub code: String,
}

/// Request body for the password reset operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestPasswordResetRequest {
    /// Email of the account to reset.
    pub email: String,
}

/// Request body for [`confirm_password_reset`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmPasswordResetRequest {
    /// New password.
    pub password: String,
    /// Repeated password.
    pub confirm_password: String,
}

/// Request body for [`join_with_invite`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinWithInviteRequest {
    /// Invite token.
    pub token: String,
    /// First name of the joining user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name of the joining user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Password for the new account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Log in to the platform.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn login(config: &ConfigHandle, request: &LoginRequest) -> Result<LoginResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/login"),
        RequestOptions {
            method: Method::POST,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Log out the current user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn logout(config: &ConfigHandle) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/logout"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Check whether the current credentials authenticate.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn check_auth(config: &ConfigHandle) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/auth"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Get the OAuth2 authorization URL for the given provider.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn oauth2_authz_url(
    config: &ConfigHandle,
    provider: OAuth2Provider,
    redirect_uri: Option<&str>,
    state: Option<&str>,
) -> Result<OAuth2AuthzUrlResponse> {
    let mut query = QueryParams::new();
    query.push("provider", provider.name());
    query.push_opt("redirect_uri", redirect_uri);
    query.push_opt("state", state);
    execute(
        config,
        &format!("{BASE_PATH}/oauth2/authz/url"),
        RequestOptions::<()> {
            query,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Get the OAuth2 authorization URL for linking a provider to an
/// existing account.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn oauth2_authz_url_for_link(
    config: &ConfigHandle,
    provider: OAuth2Provider,
    redirect_uri: Option<&str>,
) -> Result<OAuth2AuthzUrlResponse> {
    let mut query = QueryParams::new();
    query.push("provider", provider.name());
    query.push_opt("redirect_uri", redirect_uri);
    execute(
        config,
        &format!("{BASE_PATH}/oauth2/authz/url/link"),
        RequestOptions::<()> {
            query,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Begin MFA enrollment for the current user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn setup_mfa(config: &ConfigHandle) -> Result<MfaSetupResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/mfa"),
        RequestOptions::<()> {
            method: Method::PUT,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Validate an MFA code.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn validate_mfa(
    config: &ConfigHandle,
    request: &MfaValidateRequest,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/mfa"),
        RequestOptions {
            method: Method::POST,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Remove MFA from the current user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn remove_mfa(config: &ConfigHandle) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/mfa"),
        RequestOptions::<()> {
            method: Method::DELETE,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Request a password reset URL by email.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn request_password_reset(
    config: &ConfigHandle,
    request: &RequestPasswordResetRequest,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/password"),
        RequestOptions {
            method: Method::PUT,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Request a password reset token by email.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn request_password_token(
    config: &ConfigHandle,
    request: &RequestPasswordResetRequest,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/password/token"),
        RequestOptions {
            method: Method::POST,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Confirm a password reset with the token sent to the user.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn confirm_password_reset(
    config: &ConfigHandle,
    handle: &str,
    token: &str,
    request: &ConfirmPasswordResetRequest,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/password/confirm/users/{handle}/tokens/{token}"),
        RequestOptions {
            method: Method::PUT,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Join the platform with an invite token.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn join_with_invite(
    config: &ConfigHandle,
    request: &JoinWithInviteRequest,
) -> Result<LoginResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/join/invites/token"),
        RequestOptions {
            method: Method::POST,
            body: Some(request),
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
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn handle(server: &MockServer) -> ConfigHandle {
        ConfigHandle::new(RequestConfig::new(server.uri()))
    }

    #[tokio::test]
    async fn login_posts_credentials_and_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/iam/v1/login"))
            .and(body_json(json!({"handle": "ada", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "user": {"id": "u1", "handle": "ada"},
                "token": "session-token"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = handle(&server);
        let request = LoginRequest {
            handle: Some("ada".to_string()),
            password: Some("pw".to_string()),
            ..LoginRequest::default()
        };
        let response = login(&config, &request).await.unwrap();
        assert!(response.base.success);
        assert_eq!(response.token.as_deref(), Some("session-token"));
        assert_eq!(response.user.unwrap().handle.as_deref(), Some("ada"));
    }

    #[tokio::test]
    async fn oauth2_url_sends_provider_and_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/iam/v1/oauth2/authz/url"))
            .and(query_param("provider", "github"))
            .and(query_param("redirect_uri", "https://app/cb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "url": "https://github.com/login/oauth/authorize?..."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = handle(&server);
        let response = oauth2_authz_url(
            &config,
            OAuth2Provider::Github,
            Some("https://app/cb"),
            None,
        )
        .await
        .unwrap();
        assert!(response.url.unwrap().starts_with("https://github.com"));
    }

    #[tokio::test]
    async fn mfa_lifecycle_uses_one_path_with_three_verbs() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/iam/v1/mfa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "secret": "base32secret"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/iam/v1/mfa"))
            .and(body_json(json!({"code": "123456"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/iam/v1/mfa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let config = handle(&server);
        let setup = setup_mfa(&config).await.unwrap();
        assert_eq!(setup.secret.as_deref(), Some("base32secret"));

        let request = MfaValidateRequest {
            code: "123456".to_string(),
        };
        assert!(validate_mfa(&config, &request).await.unwrap().success);
        assert!(remove_mfa(&config).await.unwrap().success);
    }
}
