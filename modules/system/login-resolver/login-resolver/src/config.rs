//! Configuration for the login resolver.

use serde::{Deserialize, Serialize};

use crate::domain::ProviderKind;

/// Configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginResolverConfig {
    /// Providers to register, one registry entry each.
    ///
    /// Issuers must be unique across entries.
    pub providers: Vec<ProviderConfig>,
}

impl Default for LoginResolverConfig {
    fn default() -> Self {
        Self {
            providers: vec![
                ProviderConfig {
                    kind: ProviderKind::Google,
                    issuer: None,
                },
                ProviderConfig {
                    kind: ProviderKind::ActiveDirectory,
                    issuer: None,
                },
            ],
        }
    }
}

/// A single registry entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    pub kind: ProviderKind,

    /// Issuer override; defaults to the provider's well-known issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl ProviderConfig {
    /// Effective issuer for this entry.
    #[must_use]
    pub fn issuer(&self) -> &str {
        self.issuer.as_deref().unwrap_or(self.kind.default_issuer())
    }
}
