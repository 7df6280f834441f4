//! Provider parsers.
//!
//! Each identity provider is a variant of [`ProviderKind`] carrying a fixed
//! claim-type mapping table and an ordered list of required fields. Parsing
//! walks the claim sequence once; unrecognized claim types are ignored and a
//! repeated claim type overwrites the earlier value.

use std::fmt;

use login_resolver_sdk::{Claim, Login, LoginField, ValidationError, normalize_identity};
use serde::{Deserialize, Serialize};

/// Claim type identifiers recognized by the built-in providers.
pub mod claim_types {
    pub const NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
    pub const NAME_IDENTIFIER: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
    pub const EMAIL_ADDRESS: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
    pub const GIVEN_NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/givenname";
    pub const SURNAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/surname";
    pub const PRIMARY_SID: &str =
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/primarysid";

    // Short OIDC claim names
    pub const OIDC_NAME: &str = "name";
    pub const EMAIL_VERIFIED: &str = "email_verified";
    pub const PICTURE: &str = "picture";
    pub const PREFERRED_USERNAME: &str = "preferred_username";
}

/// Mapping of claim types to login fields
/// Format: `(claim_type, field)`
const GOOGLE_CLAIMS: &[(&str, LoginField)] = &[
    (claim_types::OIDC_NAME, LoginField::Name),
    (claim_types::EMAIL_ADDRESS, LoginField::Email),
    (claim_types::EMAIL_VERIFIED, LoginField::EmailVerified),
    (claim_types::PICTURE, LoginField::Picture),
    (claim_types::GIVEN_NAME, LoginField::GivenName),
    (claim_types::SURNAME, LoginField::Surname),
    (claim_types::NAME_IDENTIFIER, LoginField::Subject),
];

const DIRECTORY_CLAIMS: &[(&str, LoginField)] = &[
    (claim_types::PRIMARY_SID, LoginField::Subject),
    (claim_types::NAME, LoginField::Name),
];

/// Required fields, reported in this order when several are missing.
const GOOGLE_REQUIRED: &[LoginField] = &[LoginField::Subject, LoginField::Name, LoginField::Email];

const DIRECTORY_REQUIRED: &[LoginField] = &[LoginField::Subject, LoginField::Name];

/// Issuer of Google-issued OpenID Connect tokens.
pub const GOOGLE_ISSUER: &str = "https://accounts.google.com";

/// Issuer of on-premise directory and local Windows identities.
pub const LOCAL_AUTHORITY_ISSUER: &str = "AD AUTHORITY";

/// Identity provider variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Federated OpenID Connect provider.
    Google,
    /// On-premise directory service.
    ActiveDirectory,
    /// Local OS identity of the running process.
    Windows,
}

impl ProviderKind {
    /// Tag stamped on every [`Login`] this provider produces.
    #[must_use]
    pub const fn provider_name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::ActiveDirectory => "ActiveDirectory",
            Self::Windows => "Windows",
        }
    }

    /// Issuer the provider is registered under unless configured otherwise.
    #[must_use]
    pub const fn default_issuer(self) -> &'static str {
        match self {
            Self::Google => GOOGLE_ISSUER,
            Self::ActiveDirectory | Self::Windows => LOCAL_AUTHORITY_ISSUER,
        }
    }

    #[must_use]
    pub const fn claim_table(self) -> &'static [(&'static str, LoginField)] {
        match self {
            Self::Google => GOOGLE_CLAIMS,
            Self::ActiveDirectory | Self::Windows => DIRECTORY_CLAIMS,
        }
    }

    #[must_use]
    pub const fn required_fields(self) -> &'static [LoginField] {
        match self {
            Self::Google => GOOGLE_REQUIRED,
            Self::ActiveDirectory | Self::Windows => DIRECTORY_REQUIRED,
        }
    }

    /// Whether names are reduced from `DOMAIN\user` to `user`.
    ///
    /// Directory and OS names are always domain-qualified account names.
    #[must_use]
    pub const fn normalizes_name(self) -> bool {
        matches!(self, Self::ActiveDirectory | Self::Windows)
    }

    fn field_for(self, claim_type: &str) -> Option<LoginField> {
        self.claim_table()
            .iter()
            .find(|(t, _)| *t == claim_type)
            .map(|(_, field)| *field)
    }

    /// Parse a claim sequence into a [`Login`].
    ///
    /// # Errors
    ///
    /// - `MissingClaim` for the first required field that is absent or empty
    /// - `MalformedClaim` if the last `email_verified` is not `true` or `false`
    pub fn parse(self, claims: &[Claim]) -> Result<Login, ValidationError> {
        let provider = self.provider_name();
        let mut values = ClaimValues::default();

        for claim in claims {
            let Some(field) = self.field_for(&claim.claim_type) else {
                continue;
            };
            if field == LoginField::EmailVerified {
                values.set_email_verified(&claim.value);
            } else if let Some(slot) = values.slot(field) {
                *slot = Some(claim.value.clone());
            }
        }

        if self.normalizes_name()
            && let Some(name) = values.name.as_mut()
            && !name.is_empty()
        {
            *name = normalize_identity(Some(name.as_str()));
        }

        for &field in self.required_fields() {
            if !values.is_present(field) {
                return Err(ValidationError::MissingClaim { provider, field });
            }
        }

        if let Some(value) = values.malformed_email_verified.take() {
            return Err(ValidationError::MalformedClaim {
                provider,
                field: LoginField::EmailVerified,
                value,
            });
        }

        values.into_login(provider)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.provider_name())
    }
}

/// `true`/`false`, case-insensitive, surrounding whitespace ignored.
fn parse_bool(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Values collected during the claim pass.
#[derive(Default)]
struct ClaimValues {
    subject: Option<String>,
    name: Option<String>,
    given_name: Option<String>,
    surname: Option<String>,
    email: Option<String>,
    email_verified: Option<bool>,
    /// Last `email_verified` value, when it was not a boolean.
    malformed_email_verified: Option<String>,
    picture: Option<String>,
}

impl ClaimValues {
    fn set_email_verified(&mut self, raw: &str) {
        match parse_bool(raw) {
            Some(verified) => {
                self.email_verified = Some(verified);
                self.malformed_email_verified = None;
            }
            None => {
                self.email_verified = None;
                self.malformed_email_verified = Some(raw.to_owned());
            }
        }
    }

    fn slot(&mut self, field: LoginField) -> Option<&mut Option<String>> {
        match field {
            LoginField::Subject => Some(&mut self.subject),
            LoginField::Name => Some(&mut self.name),
            LoginField::GivenName => Some(&mut self.given_name),
            LoginField::Surname => Some(&mut self.surname),
            LoginField::Email => Some(&mut self.email),
            LoginField::Picture => Some(&mut self.picture),
            LoginField::EmailVerified => None,
        }
    }

    fn is_present(&self, field: LoginField) -> bool {
        let value = match field {
            LoginField::Subject => &self.subject,
            LoginField::Name => &self.name,
            LoginField::GivenName => &self.given_name,
            LoginField::Surname => &self.surname,
            LoginField::Email => &self.email,
            LoginField::Picture => &self.picture,
            LoginField::EmailVerified => return self.email_verified.is_some(),
        };
        value.as_deref().is_some_and(|v| !v.is_empty())
    }

    fn into_login(self, provider: &'static str) -> Result<Login, ValidationError> {
        let mut builder = Login::builder(provider);
        if let Some(subject) = self.subject {
            builder = builder.subject(subject);
        }
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(given_name) = self.given_name {
            builder = builder.given_name(given_name);
        }
        if let Some(surname) = self.surname {
            builder = builder.surname(surname);
        }
        if let Some(email) = self.email {
            builder = builder.email(email);
        }
        if let Some(verified) = self.email_verified {
            builder = builder.email_verified(verified);
        }
        if let Some(picture) = self.picture {
            builder = builder.picture(picture);
        }
        builder.build()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn google(claim_type: &str, value: &str) -> Claim {
        Claim::new(claim_type, value, GOOGLE_ISSUER)
    }

    fn directory(claim_type: &str, value: &str) -> Claim {
        Claim::new(claim_type, value, LOCAL_AUTHORITY_ISSUER)
    }

    fn google_minimal() -> Vec<Claim> {
        vec![
            google(claim_types::NAME_IDENTIFIER, "s1"),
            google(claim_types::OIDC_NAME, "n1"),
            google(claim_types::EMAIL_ADDRESS, "e1"),
        ]
    }

    #[test]
    fn google_full_claim_set() {
        let mut claims = google_minimal();
        claims.extend([
            google(claim_types::EMAIL_VERIFIED, "true"),
            google(claim_types::GIVEN_NAME, "Nina"),
            google(claim_types::SURNAME, "Ng"),
            google(claim_types::PICTURE, "https://lh3.example.com/n1"),
        ]);

        let login = ProviderKind::Google.parse(&claims).unwrap();

        assert_eq!(login.provider(), "Google");
        assert_eq!(login.subject(), "s1");
        assert_eq!(login.name(), Some("n1"));
        assert_eq!(login.email(), Some("e1"));
        assert_eq!(login.email_verified(), Some(true));
        assert_eq!(login.given_name(), Some("Nina"));
        assert_eq!(login.surname(), Some("Ng"));
        assert_eq!(login.picture(), Some("https://lh3.example.com/n1"));
    }

    #[test]
    fn google_optional_fields_stay_absent() {
        let login = ProviderKind::Google.parse(&google_minimal()).unwrap();

        assert_eq!(login.email_verified(), None);
        assert_eq!(login.given_name(), None);
        assert_eq!(login.surname(), None);
        assert_eq!(login.picture(), None);
    }

    #[test]
    fn google_reports_missing_fields_in_order() {
        let err = ProviderKind::Google.parse(&[]).unwrap_err();
        assert_eq!(err.field(), LoginField::Subject);

        let err = ProviderKind::Google
            .parse(&[google(claim_types::NAME_IDENTIFIER, "s1")])
            .unwrap_err();
        assert_eq!(err.field(), LoginField::Name);

        let err = ProviderKind::Google
            .parse(&[
                google(claim_types::NAME_IDENTIFIER, "s1"),
                google(claim_types::OIDC_NAME, "n1"),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingClaim {
                provider: "Google",
                field: LoginField::Email,
            }
        );
    }

    #[test]
    fn google_does_not_read_directory_name_claim() {
        let claims = vec![
            google(claim_types::NAME_IDENTIFIER, "s1"),
            google(claim_types::NAME, "CORP\\n1"),
            google(claim_types::EMAIL_ADDRESS, "e1"),
        ];

        let err = ProviderKind::Google.parse(&claims).unwrap_err();
        assert_eq!(err.field(), LoginField::Name);
    }

    #[test]
    fn email_verified_accepts_any_case() {
        let mut claims = google_minimal();
        claims.push(google(claim_types::EMAIL_VERIFIED, " False "));

        let login = ProviderKind::Google.parse(&claims).unwrap();
        assert_eq!(login.email_verified(), Some(false));
    }

    #[test]
    fn malformed_email_verified_fails() {
        let mut claims = google_minimal();
        claims.push(google(claim_types::EMAIL_VERIFIED, "yes"));

        let err = ProviderKind::Google.parse(&claims).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MalformedClaim {
                provider: "Google",
                field: LoginField::EmailVerified,
                value: "yes".to_owned(),
            }
        );
    }

    #[test]
    fn missing_subject_outranks_malformed_email_verified() {
        let claims = vec![
            google(claim_types::OIDC_NAME, "n1"),
            google(claim_types::EMAIL_ADDRESS, "e1"),
            google(claim_types::EMAIL_VERIFIED, "yes"),
        ];

        let err = ProviderKind::Google.parse(&claims).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingClaim {
                provider: "Google",
                field: LoginField::Subject,
            }
        );
    }

    #[test]
    fn later_valid_email_verified_replaces_malformed_one() {
        let mut claims = google_minimal();
        claims.push(google(claim_types::EMAIL_VERIFIED, "yes"));
        claims.push(google(claim_types::EMAIL_VERIFIED, "true"));

        let login = ProviderKind::Google.parse(&claims).unwrap();
        assert_eq!(login.email_verified(), Some(true));

        claims.push(google(claim_types::EMAIL_VERIFIED, "maybe"));
        let err = ProviderKind::Google.parse(&claims).unwrap_err();
        assert_eq!(err.field(), LoginField::EmailVerified);
    }

    #[test]
    fn directory_and_windows_report_missing_subject_first() {
        let claims = vec![
            directory("groupsid", "S-1-5-32-545"),
            directory(claim_types::NAME, "CORP\\alice"),
            directory("amr", "pwd"),
        ];

        for kind in [ProviderKind::ActiveDirectory, ProviderKind::Windows] {
            let err = kind.parse(&claims).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingClaim {
                    provider: kind.provider_name(),
                    field: LoginField::Subject,
                }
            );
        }
    }

    #[test]
    fn last_occurrence_wins() {
        let mut claims = google_minimal();
        claims.push(google(claim_types::OIDC_NAME, "n2"));
        claims.push(google(claim_types::EMAIL_VERIFIED, "true"));
        claims.push(google(claim_types::EMAIL_VERIFIED, "false"));

        let login = ProviderKind::Google.parse(&claims).unwrap();
        assert_eq!(login.name(), Some("n2"));
        assert_eq!(login.email_verified(), Some(false));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut claims = google_minimal();
        claims.push(google(claim_types::EMAIL_ADDRESS, ""));

        let err = ProviderKind::Google.parse(&claims).unwrap_err();
        assert_eq!(err.field(), LoginField::Email);
    }

    #[test]
    fn directory_normalizes_name() {
        let claims = vec![
            directory(claim_types::PRIMARY_SID, "S-1-5-21-1004"),
            directory(claim_types::NAME, "CORP\\alice"),
        ];

        let login = ProviderKind::ActiveDirectory.parse(&claims).unwrap();
        assert_eq!(login.provider(), "ActiveDirectory");
        assert_eq!(login.subject(), "S-1-5-21-1004");
        assert_eq!(login.name(), Some("alice"));
        assert_eq!(login.email(), None);
    }

    #[test]
    fn windows_normalizes_name_like_directory() {
        let claims = vec![
            directory(claim_types::NAME, "WORKSTATION\\bob"),
            directory(claim_types::PRIMARY_SID, "S-1-5-21-500"),
        ];

        let login = ProviderKind::Windows.parse(&claims).unwrap();
        assert_eq!(login.provider(), "Windows");
        assert_eq!(login.name(), Some("bob"));
    }

    #[test]
    fn directory_missing_name() {
        let claims = vec![directory(claim_types::PRIMARY_SID, "S-1-5-21-1004")];

        let err = ProviderKind::ActiveDirectory.parse(&claims).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingClaim {
                provider: "ActiveDirectory",
                field: LoginField::Name,
            }
        );
        assert_eq!(err.to_string(), "ActiveDirectory login is missing name claim");
    }

    #[test]
    fn directory_name_with_only_domain_is_missing() {
        let claims = vec![
            directory(claim_types::PRIMARY_SID, "S-1-5-21-1004"),
            directory(claim_types::NAME, "CORP\\"),
        ];

        let err = ProviderKind::ActiveDirectory.parse(&claims).unwrap_err();
        assert_eq!(err.field(), LoginField::Name);
    }

    #[test]
    fn unrecognized_claims_are_ignored() {
        let claims = vec![
            directory("groupsid", "S-1-5-32-545"),
            directory(claim_types::PRIMARY_SID, "S-1-5-21-1004"),
            directory(claim_types::EMAIL_ADDRESS, "alice@corp.example"),
            directory(claim_types::NAME, "alice"),
            directory("amr", "pwd"),
        ];

        let login = ProviderKind::ActiveDirectory.parse(&claims).unwrap();
        assert_eq!(login.name(), Some("alice"));
        assert_eq!(login.email(), None);
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("1"), None);
    }

    #[test]
    fn default_issuers() {
        assert_eq!(ProviderKind::Google.default_issuer(), "https://accounts.google.com");
        assert_eq!(ProviderKind::ActiveDirectory.default_issuer(), "AD AUTHORITY");
        assert_eq!(ProviderKind::Windows.default_issuer(), "AD AUTHORITY");
    }
}
