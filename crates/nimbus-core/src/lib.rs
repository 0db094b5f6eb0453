//! # nimbus-core
//!
//! Shared plumbing for the Nimbus platform clients: the configuration
//! cell, the request executor, the error taxonomy, and the verb-named
//! base client everything else delegates to.
//!
//! ## Modules
//!
//! - [`config`] - Connection configuration and the shared handle
//! - [`error`] - Transport/application error taxonomy
//! - [`request`] - The single request-execution funnel
//! - [`client`] - Verb-named convenience layer ([`ApiClient`])
//! - [`query`] - Insertion-ordered query parameter builder
//! - [`types`] - Wire types shared by every service

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod request;
pub mod types;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::{ConfigHandle, ConfigUpdate, RequestConfig};
pub use error::{ApiError, Error, Result};
pub use query::QueryParams;
pub use request::{execute, RequestOptions, EXTERNAL_TOKEN_HEADER};
pub use types::BaseResponse;
