//! Ambient "who is currently authenticated" sources.
//!
//! - [`ClaimsLoginSource`]: the claim set attached to the current request
//! - [`ProcessLoginSource`]: the OS account running this process
//!
//! The deprecated [`HttpContextUser`] and [`ProcessUser`] only report a
//! display name and never consult the provider registry.

pub mod http_context;
pub mod process;

#[allow(deprecated)]
pub use http_context::HttpContextUser;
pub use http_context::ClaimsLoginSource;
#[allow(deprecated)]
pub use process::ProcessUser;
pub use process::{ProcessIdentity, ProcessLoginSource};
