//! Login Resolver SDK
//!
//! This crate provides the public API for the `login_resolver` module:
//!
//! - [`Login`] - Canonical login record produced from a claim set
//! - [`Claim`] - Issuer-scoped claim supplied by the authentication layer
//! - [`LoginResolverClient`] - Public API trait for consumers
//! - [`CurrentLoginSource`] - "Who is currently authenticated" capability
//! - [`LoginResolverError`] / [`ValidationError`] - Error types
//! - [`normalize_identity`] - Identity-string normalizer
//!
//! ## Usage
//!
//! ```ignore
//! use login_resolver_sdk::LoginResolverClient;
//!
//! // `claims` come from the request's authenticated principal
//! match resolver.resolve(&claims)? {
//!     Some(login) => tracing::info!(subject = login.subject(), "authenticated"),
//!     None => tracing::info!("anonymous request"),
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;
pub mod normalize;

// Re-export main types at crate root
#[allow(deprecated)]
pub use api::CurrentUserSource;
pub use api::{CurrentLoginSource, LoginResolverClient};
pub use error::{LoginResolverError, ValidationError};
pub use models::{Claim, Login, LoginBuilder, LoginField};
pub use normalize::{ANONYMOUS, normalize_identity};
