//! Server configuration: YAML file overlaid with `LOGIN_SERVER__*` env vars.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use login_resolver::config::LoginResolverConfig;
use serde::{Deserialize, Serialize};

use crate::static_claims::StaticClaimsConfig;

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "LOGIN_SERVER__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub login_resolver: LoginResolverConfig,
    pub static_claims: StaticClaimsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 8087)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the
    /// wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__")).extract()
    }
}
