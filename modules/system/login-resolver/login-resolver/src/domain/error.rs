//! Domain errors for the login resolver.

use login_resolver_sdk::{LoginResolverError, ValidationError};
use thiserror::Error;

use super::provider::ProviderKind;

/// Internal domain errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no parser registered for issuer '{issuer}'")]
    UnregisteredIssuer { issuer: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no login found")]
    NoIdentity,
}

impl DomainError {
    #[must_use]
    pub fn unregistered_issuer(issuer: impl Into<String>) -> Self {
        Self::UnregisteredIssuer {
            issuer: issuer.into(),
        }
    }
}

impl From<DomainError> for LoginResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnregisteredIssuer { issuer } => Self::UnregisteredIssuer { issuer },
            DomainError::Validation(err) => Self::Validation(err),
            DomainError::NoIdentity => Self::NoIdentity,
        }
    }
}

/// Errors raised while building the provider registry at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("issuer '{issuer}' is already registered to {existing}, cannot register {rejected}")]
    DuplicateIssuer {
        issuer: String,
        existing: ProviderKind,
        rejected: ProviderKind,
    },

    #[error("cannot register {kind} under an empty issuer")]
    EmptyIssuer { kind: ProviderKind },
}
