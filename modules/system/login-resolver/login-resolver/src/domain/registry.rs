//! Issuer to provider lookup table.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::config::LoginResolverConfig;

use super::error::RegistryError;
use super::provider::ProviderKind;

/// Immutable issuer → provider map.
///
/// Built once at startup and shared by reference (`Arc<ProviderRegistry>`);
/// lookups never lock because nothing mutates the map after `build`.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, ProviderKind>,
}

/// Builder for [`ProviderRegistry`].
///
/// Issuers are unique keys: registering a second provider for an issuer
/// that is already taken is rejected rather than silently overwritten.
#[derive(Debug, Default)]
pub struct ProviderRegistryBuilder {
    providers: HashMap<String, ProviderKind>,
}

impl ProviderRegistryBuilder {
    /// Register `kind` as the parser for `issuer`.
    ///
    /// # Errors
    ///
    /// - `EmptyIssuer` if `issuer` is empty
    /// - `DuplicateIssuer` if `issuer` is already registered
    pub fn register(
        mut self,
        issuer: impl Into<String>,
        kind: ProviderKind,
    ) -> Result<Self, RegistryError> {
        let issuer = issuer.into();
        if issuer.is_empty() {
            return Err(RegistryError::EmptyIssuer { kind });
        }

        match self.providers.entry(issuer) {
            Entry::Occupied(entry) => Err(RegistryError::DuplicateIssuer {
                issuer: entry.key().clone(),
                existing: *entry.get(),
                rejected: kind,
            }),
            Entry::Vacant(entry) => {
                entry.insert(kind);
                Ok(self)
            }
        }
    }

    #[must_use]
    pub fn build(self) -> ProviderRegistry {
        ProviderRegistry {
            providers: self.providers,
        }
    }
}

impl ProviderRegistry {
    #[must_use]
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    /// Build the registry from configuration, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] raised by a provider entry.
    pub fn from_config(cfg: &LoginResolverConfig) -> Result<Self, RegistryError> {
        cfg.providers
            .iter()
            .try_fold(Self::builder(), |builder, provider| {
                builder.register(provider.issuer(), provider.kind)
            })
            .map(ProviderRegistryBuilder::build)
    }

    /// Provider registered for `issuer`, if any.
    #[must_use]
    pub fn lookup(&self, issuer: &str) -> Option<ProviderKind> {
        self.providers.get(issuer).copied()
    }

    /// Registered `(issuer, provider)` pairs, sorted by issuer.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, ProviderKind)> {
        let mut entries: Vec<_> = self
            .providers
            .iter()
            .map(|(issuer, kind)| (issuer.as_str(), *kind))
            .collect();
        entries.sort_unstable_by_key(|(issuer, _)| *issuer);
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
