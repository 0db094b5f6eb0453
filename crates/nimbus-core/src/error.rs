//! Error types for Nimbus API calls.
//!
//! Every failure is one of two kinds: a [`Error::Transport`] failure that
//! happened before any HTTP response was obtained, or an [`ApiError`]
//! carried by [`Error::Api`] for a received-but-unsuccessful response.
//! Callers branch on the variant, never on message text.

use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Specialized result type for Nimbus operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Nimbus API calls.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure before any HTTP response was obtained: connection refused,
    /// DNS, TLS, request-body encoding, or cooperative cancellation.
    #[error("transport error: {message}")]
    Transport {
        /// Human-readable description of the underlying failure.
        message: String,
        /// The originating error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// A response was received but its status was outside 200-299.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// True for pre-response failures, including cancellation.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// True for non-2xx responses.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The application error, when this is one.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            Self::Transport { .. } => None,
        }
    }

    pub(crate) fn cancelled() -> Self {
        Self::Transport {
            message: "request cancelled".to_string(),
            source: None,
        }
    }

    pub(crate) fn transport(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Body shape the platform uses to describe failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
    traceback: Option<String>,
}

/// A received-but-unsuccessful response, with best-effort structured
/// detail extracted from the body.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Response headers, kept for inspection.
    pub headers: HeaderMap,
    /// Server-provided message, or a synthesized
    /// `Request failed: <status> <reason>` when the body had none.
    pub message: String,
    /// Structured error strings from the body.
    pub errors: Vec<String>,
    /// Structured warning strings from the body.
    pub warnings: Vec<String>,
    /// Server-side trace text, when the platform returned one.
    pub traceback: Option<String>,
}

impl ApiError {
    /// Build an error from a non-2xx response.
    ///
    /// Never fails: an unreadable or unparsable body degrades to the
    /// synthesized message with empty error/warning lists. A traceback in
    /// the body is emitted to the diagnostic log before the error
    /// propagates; it stays attached for callers that want it.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let fallback = format!(
            "Request failed: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => {
                if let Some(traceback) = &parsed.traceback {
                    tracing::error!(status = status.as_u16(), "{traceback}");
                }
                Self {
                    status,
                    headers,
                    message: parsed.message.unwrap_or(fallback),
                    errors: parsed.errors,
                    warnings: parsed.warnings,
                    traceback: parsed.traceback,
                }
            }
            Err(_) => Self {
                status,
                headers,
                message: fallback,
                errors: Vec::new(),
                warnings: Vec::new(),
                traceback: None,
            },
        }
    }
}
