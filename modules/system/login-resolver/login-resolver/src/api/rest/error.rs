use axum::Json;
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use login_resolver_sdk::LoginResolverError;
use serde::Serialize;

/// Problem details body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct Problem {
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
}

impl Problem {
    #[must_use]
    pub fn new(status: StatusCode, title: &'static str, detail: impl Into<String>) -> Self {
        Self {
            title,
            status: status.as_u16(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

/// Errors surfaced by login extractors and handlers.
#[derive(Debug)]
pub enum ApiError {
    Resolver(LoginResolverError),
    /// The router was built without a resolver extension.
    NotConfigured,
}

impl From<LoginResolverError> for ApiError {
    fn from(e: LoginResolverError) -> Self {
        Self::Resolver(e)
    }
}

/// Convert resolver errors to HTTP Problem responses
fn resolver_error_to_problem(err: &LoginResolverError) -> Problem {
    let (status, title) = match err {
        LoginResolverError::NoIdentity => (StatusCode::UNAUTHORIZED, "Authentication Required"),
        LoginResolverError::Validation(_) => (StatusCode::UNAUTHORIZED, "Invalid Login Claims"),
        LoginResolverError::InvalidSubject { .. } => (StatusCode::BAD_REQUEST, "Invalid Subject"),
        LoginResolverError::UnregisteredIssuer { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Unregistered Issuer")
        }
    };
    Problem::new(status, title, err.to_string())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let problem = match &self {
            Self::Resolver(err) => resolver_error_to_problem(err),
            Self::NotConfigured => {
                tracing::error!("Login resolver extension missing - router not configured");
                Problem::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "login resolver not configured",
                )
            }
        };
        problem.into_response()
    }
}
