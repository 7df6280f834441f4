#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Behaviour of the provided trait methods (`require`, `require_current_login`,
//! `current_subject_guid`) against minimal in-test implementations.

use login_resolver_sdk::{
    Claim, CurrentLoginSource, Login, LoginResolverClient, LoginResolverError,
};

struct FixedResolver {
    login: Option<Login>,
}

impl LoginResolverClient for FixedResolver {
    fn resolve(&self, claims: &[Claim]) -> Result<Option<Login>, LoginResolverError> {
        if claims.is_empty() {
            return Ok(None);
        }
        Ok(self.login.clone())
    }
}

struct FixedSource {
    login: Option<Login>,
}

impl CurrentLoginSource for FixedSource {
    fn current_login(&self) -> Result<Option<Login>, LoginResolverError> {
        Ok(self.login.clone())
    }
}

fn login(subject: &str) -> Login {
    Login::builder("Google")
        .subject(subject)
        .name("n1")
        .email("e1")
        .build()
        .unwrap()
}

#[test]
fn require_escalates_missing_login() {
    let resolver = FixedResolver {
        login: Some(login("s1")),
    };

    let err = resolver.require(&[]).unwrap_err();
    assert_eq!(err, LoginResolverError::NoIdentity);
}

#[test]
fn require_returns_resolved_login() {
    let resolver = FixedResolver {
        login: Some(login("s1")),
    };
    let claims = [Claim::new("name", "n1", "https://accounts.google.com")];

    let resolved = resolver.require(&claims).unwrap();
    assert_eq!(resolved.subject(), "s1");
}

#[test]
fn require_current_login_without_login_is_no_identity() {
    let source = FixedSource { login: None };

    assert_eq!(
        source.require_current_login().unwrap_err(),
        LoginResolverError::NoIdentity
    );
    assert_eq!(
        source.current_subject_guid().unwrap_err(),
        LoginResolverError::NoIdentity
    );
}

#[test]
fn current_subject_guid_parses_uuid_subject() {
    let source = FixedSource {
        login: Some(login("11111111-6a88-4768-9dfc-6bcd5187d9ed")),
    };

    let guid = source.current_subject_guid().unwrap();
    assert_eq!(guid.to_string(), "11111111-6a88-4768-9dfc-6bcd5187d9ed");
}

#[test]
fn current_subject_guid_rejects_non_uuid_subject() {
    let source = FixedSource {
        login: Some(login("108234591234")),
    };

    match source.current_subject_guid() {
        Err(LoginResolverError::InvalidSubject { subject }) => assert_eq!(subject, "108234591234"),
        other => panic!("Expected InvalidSubject, got: {other:?}"),
    }
}
