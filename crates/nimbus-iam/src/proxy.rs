//! Proxied requests through the IAM service.

use crate::Result;
use nimbus_core::{execute, ConfigHandle, RequestOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Description of a request for the IAM service to issue on the caller's
/// behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyRequest {
    /// HTTP method of the proxied request.
    pub method: String,
    /// Target URL.
    pub url: String,
    /// Headers to forward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Body to forward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

/// Issue a proxied request. The response body is returned as-is.
///
/// # Errors
///
/// Returns the shared error taxonomy of the executor.
pub async fn proxy_request(
    config: &ConfigHandle,
    request: &ProxyRequest,
) -> Result<serde_json::Value> {
    execute(
        config,
        "/api/iam/v1/proxy/request",
        RequestOptions {
            method: Method::POST,
            body: Some(request),
            ..RequestOptions::default()
        },
    )
    .await
}
