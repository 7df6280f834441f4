//! Public API traits for the login resolver.
//!
//! Consumers depend on these traits only; the resolver module provides the
//! implementations and is wired in once at startup.

use uuid::Uuid;

use crate::error::LoginResolverError;
use crate::models::{Claim, Login};

/// Public API trait for the login resolver.
///
/// ```ignore
/// let resolver: Arc<dyn LoginResolverClient> = /* built at startup */;
///
/// let login = resolver.require(&claims)?;
/// ```
pub trait LoginResolverClient: Send + Sync {
    /// Resolve a claim set into a canonical login.
    ///
    /// The issuer of the first claim selects the provider parser for the
    /// whole sequence. An empty sequence is an unauthenticated caller.
    ///
    /// # Errors
    ///
    /// - `UnregisteredIssuer` if no parser handles the first claim's issuer
    /// - `Validation` if the provider rejects the claims
    fn resolve(&self, claims: &[Claim]) -> Result<Option<Login>, LoginResolverError>;

    /// Resolve a claim set, requiring an authenticated principal.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve), plus `NoIdentity` when the claim
    /// set is empty.
    fn require(&self, claims: &[Claim]) -> Result<Login, LoginResolverError> {
        self.resolve(claims)?.ok_or(LoginResolverError::NoIdentity)
    }
}

/// "Who is currently authenticated", independent of how the current
/// principal is found (request claims, process account, ...).
pub trait CurrentLoginSource: Send + Sync {
    /// The current login, or `None` for an unauthenticated context.
    ///
    /// # Errors
    ///
    /// Propagates resolution errors from the underlying source.
    fn current_login(&self) -> Result<Option<Login>, LoginResolverError>;

    /// The current login, failing if there is none.
    ///
    /// # Errors
    ///
    /// Returns `NoIdentity` if there is no current login.
    fn require_current_login(&self) -> Result<Login, LoginResolverError> {
        self.current_login()?.ok_or(LoginResolverError::NoIdentity)
    }

    /// Subject of the current login as a unique identifier.
    ///
    /// # Errors
    ///
    /// Returns `NoIdentity` if there is no current login and
    /// `InvalidSubject` if its subject is not a UUID.
    fn current_subject_guid(&self) -> Result<Uuid, LoginResolverError> {
        self.require_current_login()?.subject_guid()
    }
}

/// Legacy "current user name" lookup.
///
/// Resolves only a display name from ambient context and bypasses claim
/// parsing entirely. Kept for callers that predate [`CurrentLoginSource`].
#[deprecated(note = "use `CurrentLoginSource` to obtain a full `Login`")]
pub trait CurrentUserSource: Send + Sync {
    /// Tag of the ambient source (e.g. `"httpcontext"`).
    fn provider(&self) -> &str;

    /// Normalized name of the current user, `"Anonymous"` if unknown.
    fn current_user(&self) -> String;
}
