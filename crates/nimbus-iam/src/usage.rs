//! Usage accounting: credits, quota, reservations, usage reports and
//! checkout.

use crate::Result;
use chrono::{DateTime, Utc};
use nimbus_core::{execute, BaseResponse, ConfigHandle, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const BASE_PATH: &str = "/api/iam/v1";

/// Credit balance of an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credits {
    /// Total balance.
    pub balance: f64,
    /// Credits held by active reservations.
    pub reserved: f64,
    /// Credits available to spend.
    pub available: f64,
    /// Credits consumed so far.
    pub consumed: f64,
}

/// Response envelope for credit balances.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditsResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The balance, when the operation returned one.
    #[serde(default)]
    pub credits: Option<Credits>,
}

/// Direction of a credits adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditOperation {
    /// Grant credits.
    Add,
    /// Withdraw credits.
    Remove,
}

/// Request body for [`update_user_credits`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCreditsRequest {
    /// Amount to adjust by.
    pub amount: f64,
    /// Direction of the adjustment.
    pub operation: CreditOperation,
    /// Reason recorded with the adjustment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A usage quota.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quota {
    /// Quota ceiling.
    pub limit: f64,
    /// Amount used.
    pub used: f64,
    /// Amount remaining.
    pub remaining: f64,
}

/// Response envelope for quotas.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The quota, when the operation returned one.
    #[serde(default)]
    pub quota: Option<Quota>,
}

/// Request body for [`create_reservation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    /// Credits to reserve.
    pub amount: f64,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A credits reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    /// Reservation ID.
    pub id: String,
    /// Reserved amount.
    pub amount: f64,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Reservation status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response envelope for a single reservation.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The reservation, when the operation returned one.
    #[serde(default)]
    pub reservation: Option<Reservation>,
}

/// Response envelope for reservation listings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationsResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Active reservations.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// One period of usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Usage {
    /// Reporting period label.
    pub period: String,
    /// Credits consumed in the period.
    #[serde(default)]
    pub credits_consumed: f64,
    /// Runtime hours in the period.
    #[serde(default)]
    pub runtime_hours: f64,
    /// Storage footprint in GB.
    #[serde(default)]
    pub storage_gb: f64,
    /// Network traffic in GB.
    #[serde(default)]
    pub network_gb: f64,
}

/// Response envelope for usage reports.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Usage per period.
    #[serde(default)]
    pub usage: Vec<Usage>,
}

/// Request body for [`create_checkout_portal`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutPortalRequest {
    /// URL to return to after checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Product to check out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Price to check out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,
}

/// Response for [`create_checkout_portal`].
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutPortalResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Portal URL to redirect the user to.
    #[serde(default)]
    pub url: Option<String>,
    /// Checkout session ID.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Get the current user's credit balance.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_credits(config: &ConfigHandle) -> Result<CreditsResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/credits"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Get another user's credit balance.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_user_credits(config: &ConfigHandle, user_id: &str) -> Result<CreditsResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/credits/users/{user_id}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Adjust a user's credits.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_user_credits(
    config: &ConfigHandle,
    user_id: &str,
    request: &UpdateCreditsRequest,
) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/credits/users/{user_id}"),
        RequestOptions {
            method: Method::PUT,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Get the current user's quota.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_quota(config: &ConfigHandle) -> Result<QuotaResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/quota"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Set the current user's quota ceiling.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn update_quota(config: &ConfigHandle, limit: f64) -> Result<QuotaResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/quota"),
        RequestOptions {
            method: Method::PUT,
            body: Some(&serde_json::json!({ "limit": limit })),
            ..RequestOptions::default()
        },
    )
    .await
}

/// List the current user's reservations.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_reservations(config: &ConfigHandle) -> Result<ReservationsResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/reservations"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Reserve credits.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn create_reservation(
    config: &ConfigHandle,
    request: &CreateReservationRequest,
) -> Result<ReservationResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/reservations"),
        RequestOptions {
            method: Method::POST,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}

/// Get a reservation by ID.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_reservation(config: &ConfigHandle, id: &str) -> Result<ReservationResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/reservations/{id}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Release a reservation.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn delete_reservation(config: &ConfigHandle, id: &str) -> Result<BaseResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/reservations/{id}"),
        RequestOptions::<()> {
            method: Method::DELETE,
            ..RequestOptions::default()
        },
    )
    .await
}

/// Get the current user's usage report.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_user_usage(config: &ConfigHandle) -> Result<UsageResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/user"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Get another user's usage report.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_specific_user_usage(
    config: &ConfigHandle,
    user_id: &str,
) -> Result<UsageResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/users/{user_id}"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Get the platform-wide usage report.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_platform_usage(config: &ConfigHandle) -> Result<UsageResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/usage/platform"),
        RequestOptions::<()>::default(),
    )
    .await
}

/// Open a checkout portal session.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn create_checkout_portal(
    config: &ConfigHandle,
    request: &CheckoutPortalRequest,
) -> Result<CheckoutPortalResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/checkout/portal"),
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
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn credits_parse_all_buckets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/iam/v1/usage/credits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "credits": {"balance": 100.0, "reserved": 10.0, "available": 90.0, "consumed": 40.0}
            })))
            .mount(&server)
            .await;

        let config = ConfigHandle::new(RequestConfig::new(server.uri()));
        let response = get_credits(&config).await.unwrap();
        let credits = response.credits.unwrap();
        assert_eq!(credits.available, 90.0);
    }

    #[tokio::test]
    async fn credit_adjustment_serializes_operation_lowercase() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/iam/v1/usage/credits/users/u1"))
            .and(body_json(json!({"amount": 25.0, "operation": "add", "reason": "promo"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ConfigHandle::new(RequestConfig::new(server.uri()));
        let request = UpdateCreditsRequest {
            amount: 25.0,
            operation: CreditOperation::Add,
            reason: Some("promo".to_string()),
        };
        assert!(update_user_credits(&config, "u1", &request)
            .await
            .unwrap()
            .success);
    }

    #[tokio::test]
    async fn quota_update_wraps_limit() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/iam/v1/usage/quota"))
            .and(body_json(json!({"limit": 500.0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "quota": {"limit": 500.0, "used": 20.0, "remaining": 480.0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ConfigHandle::new(RequestConfig::new(server.uri()));
        let response = update_quota(&config, 500.0).await.unwrap();
        assert_eq!(response.quota.unwrap().remaining, 480.0);
    }
}
