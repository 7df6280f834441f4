//! Current login from the claims of the request being handled.

use std::sync::Arc;

use login_resolver_sdk::{
    Claim, CurrentLoginSource, Login, LoginResolverClient, LoginResolverError, normalize_identity,
};

use crate::domain::claim_types;

/// Current login for one request: the request's claim set bound to the
/// shared resolver.
#[derive(Clone)]
pub struct ClaimsLoginSource {
    resolver: Arc<dyn LoginResolverClient>,
    claims: Vec<Claim>,
}

impl ClaimsLoginSource {
    #[must_use]
    pub fn new(resolver: Arc<dyn LoginResolverClient>, claims: Vec<Claim>) -> Self {
        Self { resolver, claims }
    }

    #[must_use]
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }
}

impl std::fmt::Debug for ClaimsLoginSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimsLoginSource")
            .field("claim_count", &self.claims.len())
            .finish_non_exhaustive()
    }
}

impl CurrentLoginSource for ClaimsLoginSource {
    fn current_login(&self) -> Result<Option<Login>, LoginResolverError> {
        self.resolver.resolve(&self.claims)
    }

    fn require_current_login(&self) -> Result<Login, LoginResolverError> {
        self.resolver.require(&self.claims)
    }
}

/// Legacy current user name taken straight from the request claims.
///
/// The name is the first non-empty of: the identity name claim, the OIDC
/// `name` claim, the `preferred_username` claim; then normalized.
#[deprecated(note = "use `ClaimsLoginSource` to obtain a full `Login`")]
#[derive(Debug, Clone, Default)]
pub struct HttpContextUser {
    name: Option<String>,
}

#[allow(deprecated)]
impl HttpContextUser {
    pub const PROVIDER: &'static str = "httpcontext";

    #[must_use]
    pub fn from_claims(claims: &[Claim]) -> Self {
        let name = [
            claim_types::NAME,
            claim_types::OIDC_NAME,
            claim_types::PREFERRED_USERNAME,
        ]
        .into_iter()
        .find_map(|claim_type| first_value(claims, claim_type))
        .map(ToOwned::to_owned);

        Self { name }
    }
}

fn first_value<'a>(claims: &'a [Claim], claim_type: &str) -> Option<&'a str> {
    claims
        .iter()
        .find(|c| c.claim_type == claim_type)
        .map(|c| c.value.as_str())
        .filter(|v| !v.is_empty())
}

#[allow(deprecated)]
impl login_resolver_sdk::CurrentUserSource for HttpContextUser {
    fn provider(&self) -> &str {
        Self::PROVIDER
    }

    fn current_user(&self) -> String {
        normalize_identity(self.name.as_deref())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(deprecated)]
mod tests {
    use login_resolver_sdk::CurrentUserSource;

    use super::*;
    use crate::config::LoginResolverConfig;
    use crate::module::LoginResolverModule;

    const ISSUER: &str = "https://accounts.google.com";

    fn resolver() -> Arc<dyn LoginResolverClient> {
        LoginResolverModule::init(&LoginResolverConfig::default())
            .unwrap()
            .client()
    }

    #[test]
    fn claims_source_without_claims_has_no_login() {
        let source = ClaimsLoginSource::new(resolver(), Vec::new());

        assert_eq!(source.current_login().unwrap(), None);
        assert_eq!(
            source.require_current_login().unwrap_err(),
            LoginResolverError::NoIdentity
        );
    }

    #[test]
    fn claims_source_resolves_request_claims() {
        let source = ClaimsLoginSource::new(
            resolver(),
            vec![
                Claim::new(claim_types::NAME_IDENTIFIER, "s1", ISSUER),
                Claim::new(claim_types::OIDC_NAME, "n1", ISSUER),
                Claim::new(claim_types::EMAIL_ADDRESS, "e1", ISSUER),
            ],
        );

        let login = source.require_current_login().unwrap();
        assert_eq!(login.subject(), "s1");
        assert!(matches!(
            source.current_subject_guid(),
            Err(LoginResolverError::InvalidSubject { .. })
        ));
    }

    #[test]
    fn user_prefers_identity_name() {
        let user = HttpContextUser::from_claims(&[
            Claim::new(claim_types::PREFERRED_USERNAME, "dave@corp.example", ISSUER),
            Claim::new(claim_types::OIDC_NAME, "Dave D", ISSUER),
            Claim::new(claim_types::NAME, "CORP\\dave", ISSUER),
        ]);

        assert_eq!(user.current_user(), "dave");
        assert_eq!(user.provider(), "httpcontext");
    }

    #[test]
    fn user_falls_back_to_oidc_name_then_preferred_username() {
        let user = HttpContextUser::from_claims(&[
            Claim::new(claim_types::PREFERRED_USERNAME, "dave@corp.example", ISSUER),
            Claim::new(claim_types::OIDC_NAME, "Dave D", ISSUER),
        ]);
        assert_eq!(user.current_user(), "Dave D");

        let user = HttpContextUser::from_claims(&[
            Claim::new(claim_types::OIDC_NAME, "", ISSUER),
            Claim::new(claim_types::PREFERRED_USERNAME, "dave@corp.example", ISSUER),
        ]);
        assert_eq!(user.current_user(), "dave@corp.example");
    }

    #[test]
    fn user_without_claims_is_anonymous() {
        assert_eq!(HttpContextUser::from_claims(&[]).current_user(), "Anonymous");
    }
}
