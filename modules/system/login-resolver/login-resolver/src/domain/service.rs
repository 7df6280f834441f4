//! Claim-set resolution.

use std::sync::Arc;

use login_resolver_sdk::{Claim, Login};
use tracing::{debug, instrument, warn};

use super::error::DomainError;
use super::registry::ProviderRegistry;

/// Login resolver service.
///
/// Dispatches a claim set to the provider registered for the issuer of its
/// first claim. A claim set is assumed to come from a single issuer.
#[derive(Debug, Clone)]
pub struct Service {
    registry: Arc<ProviderRegistry>,
}

impl Service {
    #[must_use]
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolve a claim set into a login.
    ///
    /// Returns `Ok(None)` for an empty claim set (unauthenticated caller).
    ///
    /// # Errors
    ///
    /// - `UnregisteredIssuer` if no provider handles the first claim's issuer
    /// - `Validation` if the provider rejects the claims
    #[instrument(skip_all, fields(claim_count = claims.len()))]
    pub fn resolve(&self, claims: &[Claim]) -> Result<Option<Login>, DomainError> {
        let Some(first) = claims.first() else {
            debug!("Empty claim set, no login");
            return Ok(None);
        };

        let provider = self.registry.lookup(&first.issuer).ok_or_else(|| {
            warn!(issuer = %first.issuer, "No parser registered for issuer");
            DomainError::unregistered_issuer(&first.issuer)
        })?;

        let login = provider.parse(claims)?;
        debug!(provider = %provider, issuer = %first.issuer, "Resolved login");
        Ok(Some(login))
    }

    /// Resolve a claim set, requiring a login.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve), plus `NoIdentity` for an empty
    /// claim set.
    pub fn require(&self, claims: &[Claim]) -> Result<Login, DomainError> {
        self.resolve(claims)?.ok_or(DomainError::NoIdentity)
    }
}
