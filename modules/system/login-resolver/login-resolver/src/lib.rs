//! Login Resolver Module
//!
//! Turns an already-authenticated, issuer-scoped claim set into a canonical
//! [`Login`](login_resolver_sdk::Login). The issuer of the first claim
//! selects a provider parser from a registry built once at startup.
//!
//! Provides the `LoginResolverClient` implementation consumed by request
//! handlers, ambient current-login sources, and axum extractors.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ambient;
pub mod api;
pub mod config;
pub mod domain;
pub mod module;

pub use module::LoginResolverModule;
