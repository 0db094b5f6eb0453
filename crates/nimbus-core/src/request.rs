//! Request execution.
//!
//! [`execute`] is the single funnel through which every HTTP call in the
//! SDK passes, whether it comes from an instance-style client or from the
//! free-function IAM surface. Header injection and error classification
//! live here and nowhere else.

use crate::config::ConfigHandle;
use crate::error::{ApiError, Error, Result};
use crate::query::QueryParams;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use url::form_urlencoded;

/// Header carrying the secondary (external) credential.
pub const EXTERNAL_TOKEN_HEADER: &str = "X-External-Token";

/// Per-call options for [`execute`].
///
/// Built fresh for every call and never persisted. The body type `B`
/// defaults to `()` for calls that send none.
#[derive(Debug)]
pub struct RequestOptions<'a, B: Serialize + ?Sized = ()> {
    /// HTTP method, `GET` when not overridden.
    pub method: Method,
    /// JSON request body. Omitted from the wire entirely when `None`, so
    /// GET/DELETE requests never carry a body.
    pub body: Option<&'a B>,
    /// Caller-supplied headers. Never overwritten by the defaulting step.
    pub headers: Option<HeaderMap>,
    /// Query parameters, appended in insertion order.
    pub query: QueryParams,
    /// Cooperative cancellation handle. Triggering it aborts the network
    /// operation and fails the call with a transport error.
    pub cancel: Option<CancellationToken>,
}

impl<'a, B: Serialize + ?Sized> Default for RequestOptions<'a, B> {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: None,
            query: QueryParams::new(),
            cancel: None,
        }
    }
}

/// Issue one HTTP request described by `path` and `options` against the
/// configuration in `config`, and decode the JSON response into `T`.
///
/// The final URL is `base_url + path`, with a query string appended only
/// when `options.query` is non-empty. `Accept` and (when a body is
/// present) `Content-Type` default to `application/json` without
/// overwriting caller values; credentials from the configuration are
/// injected as `Authorization: Bearer <token>` and `X-External-Token`.
/// Configuration fields are read once, at header-build time.
///
/// A 2xx response with an empty body decodes as `{}`. No schema
/// validation is performed; the declared `T` is a compile-time contract.
///
/// # Errors
///
/// [`Error::Transport`] for any failure before a response was obtained
/// (including cancellation), [`Error::Api`] for a non-2xx response.
pub async fn execute<B, T>(
    config: &ConfigHandle,
    path: &str,
    options: RequestOptions<'_, B>,
) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let snapshot = config.snapshot();
    let url = build_url(&snapshot.base_url, path, &options.query);

    let mut headers = options.headers.unwrap_or_default();
    if !headers.contains_key(ACCEPT) {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    }
    if options.body.is_some() && !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    if let Some(token) = &snapshot.token {
        let mut value = header_value(&format!("Bearer {}", token.expose_secret()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    if let Some(external) = &snapshot.external_token {
        let mut value = header_value(external.expose_secret())?;
        value.set_sensitive(true);
        headers.insert(EXTERNAL_TOKEN_HEADER, value);
    }

    tracing::debug!(method = %options.method, %url, "sending request");

    let mut request = config.http().request(options.method, &url).headers(headers);
    if let Some(body) = options.body {
        let bytes = serde_json::to_vec(body)
            .map_err(|err| Error::transport("failed to encode request body", err))?;
        request = request.body(bytes);
    }

    let send = request.send();
    let response = match &options.cancel {
        Some(token) => tokio::select! {
            biased;
            () = token.cancelled() => return Err(Error::cancelled()),
            result = send => result?,
        },
        None => send.await?,
    };

    if !response.status().is_success() {
        return Err(Error::Api(ApiError::from_response(response).await));
    }

    let text = response.text().await?;
    let payload = if text.is_empty() { "{}" } else { text.as_str() };
    serde_json::from_str(payload)
        .map_err(|err| Error::transport("failed to decode response body", err))
}

fn build_url(base_url: &str, path: &str, query: &QueryParams) -> String {
    let mut url = format!("{base_url}{path}");
    if !query.is_empty() {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter())
            .finish();
        url.push('?');
        url.push_str(&encoded);
    }
    url
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|err| Error::transport("invalid header value", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigHandle, RequestConfig};
    use crate::types::BaseResponse;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn handle(server: &MockServer) -> ConfigHandle {
        ConfigHandle::new(RequestConfig::new(server.uri()))
    }

    async fn only_request(server: &MockServer) -> wiremock::Request {
        server
            .received_requests()
            .await
            .expect("request recording enabled")
            .remove(0)
    }

    #[tokio::test]
    async fn bearer_and_external_tokens_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/check"))
            .and(header("Authorization", "Bearer abc"))
            .and(header(EXTERNAL_TOKEN_HEADER, "ext-1"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ConfigHandle::new(
            RequestConfig::new(server.uri())
                .with_token("abc")
                .with_external_token("ext-1"),
        );
        let response: BaseResponse = execute::<(), _>(&config, "/check", RequestOptions::default())
            .await
            .unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    async fn no_authorization_header_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let config = handle(&server);
        let _: BaseResponse = execute::<(), _>(&config, "/check", RequestOptions::default())
            .await
            .unwrap();

        let request = only_request(&server).await;
        assert!(!request.headers.contains_key("authorization"));
        assert!(!request.headers.contains_key(EXTERNAL_TOKEN_HEADER));
    }

    #[tokio::test]
    async fn caller_headers_win_over_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("Accept", "text/plain"))
            .and(header("Content-Type", "application/x-ndjson"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/x-ndjson"));

        let config = handle(&server);
        let options = RequestOptions {
            method: Method::POST,
            body: Some(&json!({"k": "v"})),
            headers: Some(headers),
            ..RequestOptions::default()
        };
        let _: BaseResponse = execute(&config, "/submit", options).await.unwrap();
    }

    #[tokio::test]
    async fn query_string_is_ordered_and_round_trips() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let mut query = QueryParams::new();
        query.push("provider", "github");
        query.push("redirect_uri", "https://app/cb?next=1");
        query.push("limit", 5);

        let config = handle(&server);
        let options = RequestOptions::<()> {
            query,
            ..RequestOptions::default()
        };
        let _: BaseResponse = execute(&config, "/authz", options).await.unwrap();

        let request = only_request(&server).await;
        let pairs: Vec<(String, String)> = request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("provider".to_string(), "github".to_string()),
                ("redirect_uri".to_string(), "https://app/cb?next=1".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn empty_query_produces_no_question_mark() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let config = handle(&server);
        let _: BaseResponse = execute::<(), _>(&config, "/plain", RequestOptions::default())
            .await
            .unwrap();

        let request = only_request(&server).await;
        assert_eq!(request.url.query(), None);
    }

    #[tokio::test]
    async fn get_requests_carry_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let config = handle(&server);
        let _: BaseResponse = execute::<(), _>(&config, "/plain", RequestOptions::default())
            .await
            .unwrap();

        let request = only_request(&server).await;
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn empty_success_body_decodes_as_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let config = handle(&server);
        let value: serde_json::Value = execute::<(), _>(&config, "/empty", RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn error_message_comes_from_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"message": "not allowed"})),
            )
            .mount(&server)
            .await;

        let config = handle(&server);
        let err = execute::<(), BaseResponse>(&config, "/denied", RequestOptions::default())
            .await
            .unwrap_err();
        let api = err.as_api().expect("application error");
        assert_eq!(api.message, "not allowed");
        assert_eq!(api.status.as_u16(), 403);
    }

    #[tokio::test]
    async fn unparsable_error_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let config = handle(&server);
        let err = execute::<(), BaseResponse>(&config, "/down", RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.as_api().unwrap().message,
            "Request failed: 502 Bad Gateway"
        );
    }

    #[tokio::test]
    async fn connection_failure_is_transport() {
        let config = ConfigHandle::new(RequestConfig::new("http://127.0.0.1:9"));
        let err = execute::<(), BaseResponse>(&config, "/x", RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn cancellation_rejects_with_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let token = CancellationToken::new();
        let cancel = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel.cancel();
        });

        let config = handle(&server);
        let options = RequestOptions::<()> {
            cancel: Some(token),
            ..RequestOptions::default()
        };
        let err = execute::<(), BaseResponse>(&config, "/slow", options)
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert!(!err.is_api());
    }

    #[tokio::test]
    async fn token_refresh_is_observed_mid_session() {
        let server = MockServer::start().await;
        Mock::given(header("Authorization", "Bearer t1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(header("Authorization", "Bearer t2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = ConfigHandle::new(RequestConfig::new(server.uri()).with_token("t1"));
        let _: BaseResponse = execute::<(), _>(&config, "/a", RequestOptions::default())
            .await
            .unwrap();

        config.update(crate::config::ConfigUpdate::new().with_token("t2"));
        let _: BaseResponse = execute::<(), _>(&config, "/a", RequestOptions::default())
            .await
            .unwrap();
    }
}
