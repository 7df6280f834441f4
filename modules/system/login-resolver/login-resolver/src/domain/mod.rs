//! Domain layer for the login resolver.

pub mod error;
pub mod local_client;
pub mod provider;
pub mod registry;
pub mod service;

pub use error::{DomainError, RegistryError};
pub use local_client::LoginResolverLocalClient;
pub use provider::{ProviderKind, claim_types};
pub use registry::ProviderRegistry;
pub use service::Service;
