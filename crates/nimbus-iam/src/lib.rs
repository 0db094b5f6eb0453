//! Identity and access management functions for the Nimbus platform.
//!
//! Every function in this crate is stateless: it takes the shared
//! [`nimbus_core::ConfigHandle`] explicitly and calls the request
//! executor directly. The same executor serves the instance-style domain
//! clients, so header injection and error semantics never diverge
//! between the two call styles.
//!
//! ## Modules
//!
//! - [`auth`] - login, logout, OAuth2, MFA, passwords, invites
//! - [`users`] - profile, search, settings, roles, onboarding
//! - [`organizations`] - organizations, membership, teams
//! - [`teams`] - teams and team membership
//! - [`tokens`] - API tokens
//! - [`secrets`] - stored secrets
//! - [`usage`] - credits, quota, reservations, usage, checkout
//! - [`accounts`] - public account lookup
//! - [`proxy`] - proxied requests
//! - [`datasources`] - external datasource connections

#![deny(missing_docs)]

pub mod accounts;
pub mod auth;
pub mod datasources;
pub mod organizations;
pub mod proxy;
pub mod secrets;
pub mod teams;
pub mod tokens;
pub mod usage;
pub mod users;

/// Convenient result alias that reuses the shared Nimbus error type.
pub type Result<T> = nimbus_core::Result<T>;
