//! Current login from the OS account running the process.

use login_resolver_sdk::{
    Claim, CurrentLoginSource, Login, LoginResolverError, normalize_identity,
};

use crate::domain::{ProviderKind, claim_types};

/// OS account facts the process runs under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessIdentity {
    pub user: Option<String>,
    pub domain: Option<String>,
    /// Security identifier of the account, when the platform exposes one.
    pub security_id: Option<String>,
}

impl ProcessIdentity {
    /// Read the account from the environment.
    ///
    /// Uses `USERNAME` (falling back to `USER`) and `USERDOMAIN`. No security
    /// identifier is available this way.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            user: env_var("USERNAME").or_else(|| env_var("USER")),
            domain: env_var("USERDOMAIN"),
            security_id: None,
        }
    }

    /// `DOMAIN\user`, or just `user` outside a domain.
    #[must_use]
    pub fn qualified_name(&self) -> Option<String> {
        let user = self.user.as_deref()?;
        Some(match self.domain.as_deref() {
            Some(domain) => format!("{domain}\\{user}"),
            None => user.to_owned(),
        })
    }

    /// Claims as the local authority would issue them for this account.
    ///
    /// The subject is the security identifier, or the qualified account
    /// name when there is none.
    #[must_use]
    pub fn to_claims(&self) -> Vec<Claim> {
        let issuer = ProviderKind::Windows.default_issuer();
        let qualified = self.qualified_name();

        let mut claims = Vec::with_capacity(2);
        if let Some(sid) = self.security_id.clone().or_else(|| qualified.clone()) {
            claims.push(Claim::new(claim_types::PRIMARY_SID, sid, issuer));
        }
        if let Some(name) = qualified {
            claims.push(Claim::new(claim_types::NAME, name, issuer));
        }
        claims
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Current login of the process account, parsed by the OS-identity provider.
///
/// Independent of the provider registry: the local authority shares its
/// issuer with the on-premise directory, so it is never registered by issuer.
#[derive(Debug, Clone)]
pub struct ProcessLoginSource {
    identity: ProcessIdentity,
}

impl ProcessLoginSource {
    #[must_use]
    pub fn new(identity: ProcessIdentity) -> Self {
        Self { identity }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ProcessIdentity::from_env())
    }
}

impl CurrentLoginSource for ProcessLoginSource {
    fn current_login(&self) -> Result<Option<Login>, LoginResolverError> {
        let claims = self.identity.to_claims();
        if claims.is_empty() {
            return Ok(None);
        }
        let login = ProviderKind::Windows.parse(&claims)?;
        Ok(Some(login))
    }
}

/// Legacy current user name of the process account.
#[deprecated(note = "use `ProcessLoginSource` to obtain a full `Login`")]
#[derive(Debug, Clone)]
pub struct ProcessUser {
    identity: ProcessIdentity,
}

#[allow(deprecated)]
impl ProcessUser {
    #[must_use]
    pub fn new(identity: ProcessIdentity) -> Self {
        Self { identity }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ProcessIdentity::from_env())
    }
}

#[allow(deprecated)]
impl login_resolver_sdk::CurrentUserSource for ProcessUser {
    fn provider(&self) -> &str {
        ProviderKind::Windows.provider_name()
    }

    fn current_user(&self) -> String {
        normalize_identity(self.identity.user.as_deref())
    }
}
