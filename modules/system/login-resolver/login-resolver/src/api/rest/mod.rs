//! Axum glue: request extractors, error responses, and sample routes.
//!
//! An upstream authentication layer inserts [`RequestClaims`] into the
//! request; the router carries the shared resolver as an `Extension`.

pub mod error;
pub mod extract;
pub mod routes;

pub use error::{ApiError, Problem};
pub use extract::{CurrentLogin, RequestClaims, RequiredLogin};
pub use routes::router;
