//! Connection configuration shared across Nimbus clients.
//!
//! A single [`RequestConfig`] is created per application session and handed
//! to every client through a [`ConfigHandle`]. The handle is a shared cell:
//! updating it in place is observed by all derived clients on their next
//! call, without re-instantiating anything.

use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, RwLock};

/// Connection context for the Nimbus platform.
///
/// Holds the target host and the optional credentials injected into every
/// request. No validation happens at construction; an unusable `base_url`
/// surfaces on the first request attempt.
#[derive(Debug, Default)]
pub struct RequestConfig {
    /// Base URL of the platform, e.g. `https://prod1.nimbus.run`.
    pub base_url: String,

    /// Bearer token sent as `Authorization: Bearer <token>`.
    pub token: Option<SecretString>,

    /// Secondary credential sent as `X-External-Token`.
    pub external_token: Option<SecretString>,
}

impl RequestConfig {
    /// Create a configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            external_token: None,
        }
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Set the external token.
    #[must_use]
    pub fn with_external_token(mut self, token: impl Into<String>) -> Self {
        self.external_token = Some(SecretString::from(token.into()));
        self
    }
}

impl Clone for RequestConfig {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: self.token.as_ref().map(clone_secret),
            external_token: self.external_token.as_ref().map(clone_secret),
        }
    }
}

fn clone_secret(secret: &SecretString) -> SecretString {
    SecretString::from(secret.expose_secret().to_owned())
}

/// Partial configuration merged into the shared cell by
/// [`ConfigHandle::update`].
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    /// Replacement base URL.
    pub base_url: Option<String>,
    /// Replacement bearer token.
    pub token: Option<String>,
    /// Replacement external token.
    pub external_token: Option<String>,
}

impl ConfigUpdate {
    /// Create an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL to replace.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the bearer token to replace.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the external token to replace.
    #[must_use]
    pub fn with_external_token(mut self, token: impl Into<String>) -> Self {
        self.external_token = Some(token.into());
        self
    }
}

struct Shared {
    http: reqwest::Client,
    state: RwLock<RequestConfig>,
}

/// Shared handle to one [`RequestConfig`] and one HTTP connection pool.
///
/// Cloning the handle is cheap and shares the same underlying cell, so a
/// token refresh through [`ConfigHandle::update`] is visible to every
/// client built from any clone. Reads are snapshots taken at header-build
/// time; a concurrent update races with in-flight requests and the last
/// value observed wins.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<Shared>,
}

impl ConfigHandle {
    /// Wrap a configuration in a fresh shared cell.
    ///
    /// The cookie store is enabled so session cookies set by the platform
    /// are carried across requests, matching the credentials-include
    /// behavior of the platform's web clients.
    #[must_use]
    pub fn new(config: RequestConfig) -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("reqwest client with rustls backend");

        Self {
            inner: Arc::new(Shared {
                http,
                state: RwLock::new(config),
            }),
        }
    }

    /// The HTTP client shared by every holder of this handle.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Copy of the current configuration.
    ///
    /// The copy is detached: mutating it does not affect the shared cell.
    #[must_use]
    pub fn snapshot(&self) -> RequestConfig {
        self.inner.state.read().unwrap().clone()
    }

    /// Merge the given fields into the shared cell, in place.
    ///
    /// The cell itself is never replaced, so every client holding this
    /// handle observes the new values on its next request.
    pub fn update(&self, update: ConfigUpdate) {
        let mut state = self.inner.state.write().unwrap();
        if let Some(base_url) = update.base_url {
            state.base_url = base_url;
        }
        if let Some(token) = update.token {
            state.token = Some(SecretString::from(token));
        }
        if let Some(external_token) = update.external_token {
            state.external_token = Some(SecretString::from(external_token));
        }
    }
}

impl std::fmt::Debug for ConfigHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigHandle")
            .field("config", &*self.inner.state.read().unwrap())
            .finish_non_exhaustive()
    }
}
