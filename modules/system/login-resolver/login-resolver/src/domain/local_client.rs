//! Local (in-process) client for the login resolver.

use std::sync::Arc;

use login_resolver_sdk::{Claim, Login, LoginResolverClient, LoginResolverError};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed to consumers as `Arc<dyn LoginResolverClient>` by the module
/// during startup.
#[derive(Debug, Clone)]
pub struct LoginResolverLocalClient {
    svc: Arc<Service>,
}

impl LoginResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> LoginResolverError {
    match &e {
        DomainError::NoIdentity => {
            tracing::debug!(operation = op, "login_resolver: no login");
        }
        DomainError::UnregisteredIssuer { issuer } => {
            tracing::error!(operation = op, issuer = %issuer, "login_resolver call failed: issuer is not registered");
        }
        DomainError::Validation(err) => {
            tracing::error!(
                operation = op,
                provider = err.provider(),
                field = %err.field(),
                error = %err,
                "login_resolver call failed"
            );
        }
    }
    e.into()
}

impl LoginResolverClient for LoginResolverLocalClient {
    fn resolve(&self, claims: &[Claim]) -> Result<Option<Login>, LoginResolverError> {
        self.svc
            .resolve(claims)
            .map_err(|e| log_and_convert("resolve", e))
    }

    fn require(&self, claims: &[Claim]) -> Result<Login, LoginResolverError> {
        self.svc
            .require(claims)
            .map_err(|e| log_and_convert("require", e))
    }
}
