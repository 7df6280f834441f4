use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
///
/// # Errors
///
/// Fails on an invalid filter or if a subscriber is already installed.
pub fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cfg.level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cfg.json {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
    }
}
