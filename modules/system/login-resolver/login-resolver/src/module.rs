//! Login resolver module.

use std::sync::Arc;

use login_resolver_sdk::LoginResolverClient;
use tracing::info;

use crate::config::LoginResolverConfig;
use crate::domain::{LoginResolverLocalClient, ProviderRegistry, RegistryError, Service};

/// Login resolver module.
///
/// Built once at startup:
/// 1. Builds the provider registry from configuration
/// 2. Creates the resolver service over the registry
/// 3. Exposes the `LoginResolverClient` for request handlers
///
/// The registry is read-only afterwards and shared through `Arc`.
#[derive(Debug, Clone)]
pub struct LoginResolverModule {
    service: Arc<Service>,
    client: Arc<LoginResolverLocalClient>,
}

impl LoginResolverModule {
    /// Initialize the module from configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if the configured providers collide on an
    /// issuer or name an empty issuer.
    #[tracing::instrument(skip_all, fields(provider_count = cfg.providers.len()))]
    pub fn init(cfg: &LoginResolverConfig) -> Result<Self, RegistryError> {
        info!("Initializing login_resolver");

        let registry = ProviderRegistry::from_config(cfg)?;
        for (issuer, kind) in registry.entries() {
            info!(issuer, provider = %kind, "Registered login provider");
        }

        let service = Arc::new(Service::new(Arc::new(registry)));
        let client = Arc::new(LoginResolverLocalClient::new(service.clone()));

        Ok(Self { service, client })
    }

    #[must_use]
    pub fn service(&self) -> &Arc<Service> {
        &self.service
    }

    /// Client handed to request handlers.
    #[must_use]
    pub fn client(&self) -> Arc<dyn LoginResolverClient> {
        self.client.clone()
    }
}
