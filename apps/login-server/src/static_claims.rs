//! Development claims supplier.
//!
//! Maps configured bearer tokens to fixed claim sets and attaches them to the
//! request as [`RequestClaims`]. Tokens are compared verbatim; nothing is
//! decoded or verified, so this layer must never face real traffic.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use login_resolver::api::rest::{Problem, RequestClaims};
use login_resolver_sdk::Claim;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticClaimsConfig {
    /// Attach claims for known bearer tokens.
    pub enabled: bool,
    pub tokens: Vec<TokenClaims>,
}

/// Claim set returned for one bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenClaims {
    pub token: String,
    pub claims: Vec<Claim>,
}

/// Token → claims lookup shared by the middleware.
#[derive(Debug, Clone, Default)]
pub struct StaticClaims {
    tokens: Arc<HashMap<String, Vec<Claim>>>,
}

impl StaticClaims {
    #[must_use]
    pub fn from_config(cfg: &StaticClaimsConfig) -> Self {
        let tokens = cfg
            .tokens
            .iter()
            .map(|m| (m.token.clone(), m.claims.clone()))
            .collect();
        Self {
            tokens: Arc::new(tokens),
        }
    }

    #[must_use]
    pub fn claims_for(&self, token: &str) -> Option<&[Claim]> {
        self.tokens.get(token).map(Vec::as_slice)
    }
}

/// Middleware attaching the claims of a known bearer token.
///
/// Requests without a bearer token pass through anonymous; an unknown token
/// is rejected with 401.
pub async fn attach_claims(
    State(claims): State<StaticClaims>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer_token(request.headers()) else {
        return next.run(request).await;
    };

    let Some(found) = claims.claims_for(token) else {
        tracing::debug!("Static claims: unknown bearer token");
        return Problem::new(
            StatusCode::UNAUTHORIZED,
            "Authentication Required",
            "unknown bearer token",
        )
        .into_response();
    };

    let found = RequestClaims(found.to_vec());
    request.extensions_mut().insert(found);
    next.run(request).await
}

/// Extract Bearer token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer ").map(str::trim))
        .filter(|s| !s.is_empty())
}
