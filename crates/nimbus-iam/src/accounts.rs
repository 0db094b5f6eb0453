//! Accounts: public account lookup by handle.

use crate::Result;
use nimbus_core::{execute, BaseResponse, ConfigHandle, RequestOptions};
use serde::{Deserialize, Serialize};

const BASE_PATH: &str = "/api/iam/v1/accounts";

/// A public account (user or organization).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Account ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Account type (user or organization).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Response envelope for account lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResponse {
    /// Common response fields.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// The account, when one matched.
    #[serde(default)]
    pub account: Option<Account>,
}

/// Get account details by handle.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn get_account_by_handle(
    config: &ConfigHandle,
    handle: &str,
) -> Result<AccountResponse> {
    execute(
        config,
        &format!("{BASE_PATH}/{handle}"),
        RequestOptions::<()>::default(),
    )
    .await
}
