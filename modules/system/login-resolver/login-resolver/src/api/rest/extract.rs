//! Axum extractors for the current login.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use http::request::Parts;
use login_resolver_sdk::{Claim, CurrentLoginSource, Login, LoginResolverClient};

#[allow(deprecated)]
use crate::ambient::HttpContextUser;
use crate::ambient::ClaimsLoginSource;

use super::error::ApiError;

/// Claim set of the authenticated principal, inserted into request
/// extensions by the authentication layer. Absent for anonymous requests.
#[derive(Debug, Clone, Default)]
pub struct RequestClaims(pub Vec<Claim>);

fn request_claims(parts: &Parts) -> Vec<Claim> {
    parts
        .extensions
        .get::<RequestClaims>()
        .map(|claims| claims.0.clone())
        .unwrap_or_default()
}

impl<S> FromRequestParts<S> for ClaimsLoginSource
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let resolver = parts
            .extensions
            .get::<Arc<dyn LoginResolverClient>>()
            .cloned()
            .ok_or(ApiError::NotConfigured)?;

        Ok(Self::new(resolver, request_claims(parts)))
    }
}

/// Current login, `None` for anonymous requests.
#[derive(Debug, Clone)]
pub struct CurrentLogin(pub Option<Login>);

impl<S> FromRequestParts<S> for CurrentLogin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let source = ClaimsLoginSource::from_request_parts(parts, state).await?;
        Ok(Self(source.current_login()?))
    }
}

/// Extractor that rejects unauthenticated requests.
#[derive(Debug, Clone)]
pub struct RequiredLogin(pub Login);

impl<S> FromRequestParts<S> for RequiredLogin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let source = ClaimsLoginSource::from_request_parts(parts, state).await?;
        Ok(Self(source.require_current_login()?))
    }
}

#[allow(deprecated)]
impl<S> FromRequestParts<S> for HttpContextUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<RequestClaims>();
        Ok(Self::from_claims(
            claims.map(|c| c.0.as_slice()).unwrap_or_default(),
        ))
    }
}
