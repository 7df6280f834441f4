//! Identity-string normalization.

/// Identity reported when no name is available.
pub const ANONYMOUS: &str = "Anonymous";

/// Normalize an identity string to a bare user name.
///
/// - `None` or an empty string yields [`ANONYMOUS`].
/// - `DOMAIN\user` yields `user`. Only the first `\` is significant, so
///   `a\b\c` yields `b\c`.
/// - Anything else is returned unchanged.
#[must_use]
pub fn normalize_identity(raw: Option<&str>) -> String {
    match raw {
        None | Some("") => ANONYMOUS.to_owned(),
        Some(name) => match name.split_once('\\') {
            Some((_domain, user)) => user.to_owned(),
            None => name.to_owned(),
        },
    }
}
