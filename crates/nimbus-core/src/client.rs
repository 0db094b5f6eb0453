//! Verb-named convenience layer over the request executor.

use crate::config::ConfigHandle;
use crate::error::Result;
use crate::query::QueryParams;
use crate::request::{execute, RequestOptions};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Building block for the domain clients.
///
/// Holds one [`ConfigHandle`] — the shared cell, not a copy — so a token
/// refresh through the handle is observed on the very next call without
/// re-instantiating the client. Every method is a one-line delegation to
/// [`execute`] with the verb fixed.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ConfigHandle,
}

impl ApiClient {
    /// Create a client over the given configuration cell.
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self { config }
    }

    /// The configuration cell this client reads from.
    #[must_use]
    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Issue a request with full control over the options.
    ///
    /// # Errors
    ///
    /// See [`execute`].
    pub async fn request<B, T>(&self, path: &str, options: RequestOptions<'_, B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        execute(&self.config, path, options).await
    }

    /// `GET` the given path.
    ///
    /// # Errors
    ///
    /// See [`execute`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<T> {
        self.request::<(), T>(
            path,
            RequestOptions {
                method: Method::GET,
                query,
                ..RequestOptions::default()
            },
        )
        .await
    }

    /// `POST` the given path with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`].
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>, query: QueryParams) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(
            path,
            RequestOptions {
                method: Method::POST,
                body,
                query,
                ..RequestOptions::default()
            },
        )
        .await
    }

    /// `PUT` the given path with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`].
    pub async fn put<B, T>(&self, path: &str, body: Option<&B>, query: QueryParams) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(
            path,
            RequestOptions {
                method: Method::PUT,
                body,
                query,
                ..RequestOptions::default()
            },
        )
        .await
    }

    /// `PATCH` the given path with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`execute`].
    pub async fn patch<B, T>(&self, path: &str, body: Option<&B>, query: QueryParams) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(
            path,
            RequestOptions {
                method: Method::PATCH,
                body,
                query,
                ..RequestOptions::default()
            },
        )
        .await
    }

    /// `DELETE` the given path.
    ///
    /// # Errors
    ///
    /// See [`execute`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<T> {
        self.request::<(), T>(
            path,
            RequestOptions {
                method: Method::DELETE,
                query,
                ..RequestOptions::default()
            },
        )
        .await
    }
}
