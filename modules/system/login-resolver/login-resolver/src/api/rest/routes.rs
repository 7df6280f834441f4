use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Json, Router};
use login_resolver_sdk::{CurrentLoginSource, Login, LoginResolverClient};
use serde::Serialize;

#[allow(deprecated)]
use crate::ambient::HttpContextUser;
use crate::ambient::ClaimsLoginSource;

use super::error::ApiError;
use super::extract::{CurrentLogin, RequiredLogin};

/// Router exposing the current login.
///
/// - `GET /api/test` - current login, `null` when anonymous
/// - `GET /api/test/required` - current login, 401 when anonymous
/// - `GET /api/test/subject` - subject of the current login as a UUID
/// - `GET /api/test/user` - legacy display name
#[must_use]
pub fn router(resolver: Arc<dyn LoginResolverClient>) -> Router {
    Router::new()
        .route("/api/test", get(current_login))
        .route("/api/test/required", get(required_login))
        .route("/api/test/subject", get(subject_guid))
        .route("/api/test/user", get(current_user))
        .layer(Extension(resolver))
}

async fn current_login(CurrentLogin(login): CurrentLogin) -> Json<Option<Login>> {
    Json(login)
}

async fn required_login(RequiredLogin(login): RequiredLogin) -> Json<Login> {
    Json(login)
}

#[derive(Debug, Serialize)]
struct SubjectDto {
    subject: String,
}

async fn subject_guid(source: ClaimsLoginSource) -> Result<Json<SubjectDto>, ApiError> {
    let subject = source.current_subject_guid()?;
    Ok(Json(SubjectDto {
        subject: subject.to_string(),
    }))
}

#[derive(Debug, Serialize)]
struct UserDto {
    provider: &'static str,
    name: String,
}

#[allow(deprecated)]
async fn current_user(user: HttpContextUser) -> Json<UserDto> {
    use login_resolver_sdk::CurrentUserSource;

    Json(UserDto {
        provider: HttpContextUser::PROVIDER,
        name: user.current_user(),
    })
}
