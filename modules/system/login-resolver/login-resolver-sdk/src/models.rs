//! Domain models for the login resolver module.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LoginResolverError, ValidationError};

/// A single `(type, value)` assertion about an authenticated principal,
/// scoped to the issuer that produced it.
///
/// The authentication layer supplies claims as an ordered sequence; the
/// resolver never validates where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type, usually a URI or a short OIDC name such as `email_verified`.
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
    pub issuer: String,
}

impl Claim {
    #[must_use]
    pub fn new(
        claim_type: impl Into<String>,
        value: impl Into<String>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            issuer: issuer.into(),
        }
    }
}

/// Fields of a [`Login`] that a provider can populate from claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    Subject,
    Name,
    GivenName,
    Surname,
    Email,
    EmailVerified,
    Picture,
}

impl LoginField {
    /// Field name as it appears in serialized logins and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Name => "name",
            Self::GivenName => "givenName",
            Self::Surname => "surname",
            Self::Email => "email",
            Self::EmailVerified => "emailVerified",
            Self::Picture => "picture",
        }
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical, provider-agnostic login.
///
/// Built by a provider parser from an authenticated claim set and immutable
/// afterwards. `subject` is never empty; optional profile fields are `None`
/// when the provider does not assert them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    provider: &'static str,
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    picture: Option<String>,
}

impl Login {
    /// Create a new `Login` builder for the given provider tag
    #[must_use]
    pub fn builder(provider: &'static str) -> LoginBuilder {
        LoginBuilder {
            provider,
            subject: None,
            name: None,
            given_name: None,
            surname: None,
            email: None,
            email_verified: None,
            picture: None,
        }
    }

    /// Tag of the provider that produced this login (e.g. `"Google"`).
    #[must_use]
    pub fn provider(&self) -> &str {
        self.provider
    }

    /// Stable identifier of the principal within its provider.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn email_verified(&self) -> Option<bool> {
        self.email_verified
    }

    #[must_use]
    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }

    /// Interpret the subject as a unique identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LoginResolverError::InvalidSubject`] if the subject is not a
    /// valid UUID.
    pub fn subject_guid(&self) -> Result<Uuid, LoginResolverError> {
        Uuid::parse_str(&self.subject).map_err(|_| LoginResolverError::InvalidSubject {
            subject: self.subject.clone(),
        })
    }
}

/// Incremental builder for [`Login`].
///
/// Providers populate fields while walking their claims; `build` enforces
/// the non-empty subject invariant.
#[derive(Debug, Clone)]
pub struct LoginBuilder {
    provider: &'static str,
    subject: Option<String>,
    name: Option<String>,
    given_name: Option<String>,
    surname: Option<String>,
    email: Option<String>,
    email_verified: Option<bool>,
    picture: Option<String>,
}

impl LoginBuilder {
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn given_name(mut self, given_name: impl Into<String>) -> Self {
        self.given_name = Some(given_name.into());
        self
    }

    #[must_use]
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn email_verified(mut self, verified: bool) -> Self {
        self.email_verified = Some(verified);
        self
    }

    #[must_use]
    pub fn picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    /// Finish the login.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingClaim`] for [`LoginField::Subject`]
    /// if no subject was set or it is empty.
    pub fn build(self) -> Result<Login, ValidationError> {
        let subject = self
            .subject
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingClaim {
                provider: self.provider,
                field: LoginField::Subject,
            })?;

        Ok(Login {
            provider: self.provider,
            subject,
            name: self.name,
            given_name: self.given_name,
            surname: self.surname,
            email: self.email,
            email_verified: self.email_verified,
            picture: self.picture,
        })
    }
}
