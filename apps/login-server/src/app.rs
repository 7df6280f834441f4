use axum::Router;
use axum::middleware;
use login_resolver::LoginResolverModule;
use login_resolver::api::rest;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::static_claims::StaticClaims;

/// Build the HTTP application: the login routes behind the optional
/// static-claims layer.
///
/// # Errors
///
/// Fails if the login resolver registry cannot be built.
pub fn build(cfg: &AppConfig) -> anyhow::Result<Router> {
    let module = LoginResolverModule::init(&cfg.login_resolver)?;
    let mut app = rest::router(module.client());

    if cfg.static_claims.enabled {
        warn!(
            token_count = cfg.static_claims.tokens.len(),
            "Static claims are enabled - bearer tokens map to fixed identities without \
             verification. Do NOT use this in production."
        );
        let claims = StaticClaims::from_config(&cfg.static_claims);
        app = app.layer(middleware::from_fn_with_state(
            claims,
            crate::static_claims::attach_claims,
        ));
    } else {
        info!("Static claims disabled - every request is anonymous");
    }

    Ok(app)
}
