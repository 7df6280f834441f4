//! Error types for the login resolver module.

use thiserror::Error;

use crate::models::LoginField;

/// A claim set from a known provider could not be turned into a login.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required claim was absent or empty.
    #[error("{provider} login is missing {field} claim")]
    MissingClaim {
        provider: &'static str,
        field: LoginField,
    },

    /// A claim was present but its value could not be interpreted.
    #[error("{provider} login has malformed {field} claim: '{value}'")]
    MalformedClaim {
        provider: &'static str,
        field: LoginField,
        value: String,
    },
}

impl ValidationError {
    /// Provider tag of the parser that rejected the claims.
    #[must_use]
    pub fn provider(&self) -> &'static str {
        match self {
            Self::MissingClaim { provider, .. } | Self::MalformedClaim { provider, .. } => {
                provider
            }
        }
    }

    /// Field that failed validation.
    #[must_use]
    pub fn field(&self) -> LoginField {
        match self {
            Self::MissingClaim { field, .. } | Self::MalformedClaim { field, .. } => *field,
        }
    }
}

/// Errors that can occur when using the login resolver API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginResolverError {
    /// The claims came from a known provider but failed its validation.
    #[error("invalid login claims: {0}")]
    Validation(#[from] ValidationError),

    /// No parser is registered for the issuer of the claims.
    ///
    /// This is a deployment defect, not a per-request condition.
    #[error("no parser registered for issuer '{issuer}'")]
    UnregisteredIssuer { issuer: String },

    /// A login was required but the caller is not authenticated.
    #[error("no login found")]
    NoIdentity,

    /// The login subject is not a valid unique identifier.
    #[error("subject '{subject}' is not a valid unique identifier")]
    InvalidSubject { subject: String },
}
