//! Type-safe participant identifier.
//!
//! [`ParticipantId`] wraps the email string that identifies a person on a
//! roster. It can only be built through [`ParticipantId::parse`], so every
//! identifier stored in a roster is guaranteed non-empty.

use std::fmt;

use crate::error::RosterError;

/// Identifier of a participant on an activity roster (an email address).
///
/// Identifiers are compared byte-for-byte: no trimming, case-folding or
/// other normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Validates and wraps a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidParticipant`] if `raw` is empty or
    /// consists only of whitespace.
    pub fn parse(raw: impl Into<String>) -> Result<Self, RosterError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(RosterError::InvalidParticipant(
                "participant identifier must not be empty".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    /// Like [`ParticipantId::parse`], but also requires a plausible email.
    ///
    /// This is the check every identifier entering a roster from outside
    /// goes through, whether from a request or a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidParticipant`] if `raw` is not a
    /// plausible email address.
    pub fn parse_email(raw: impl Into<String>) -> Result<Self, RosterError> {
        let raw = raw.into();
        if !is_plausible_email(&raw) {
            return Err(RosterError::InvalidParticipant(format!(
                "malformed email: {raw:?}"
            )));
        }
        Self::parse(raw)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exactly one `@`, non-empty local part and domain, no whitespace.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_email() {
        let Ok(id) = ParticipantId::parse("tester@example.com") else {
            panic!("valid identifier rejected");
        };
        assert_eq!(id.as_str(), "tester@example.com");
    }

    #[test]
    fn parse_rejects_empty() {
        let result = ParticipantId::parse("");
        assert!(matches!(result, Err(RosterError::InvalidParticipant(_))));
    }

    #[test]
    fn parse_rejects_whitespace_only() {
        let result = ParticipantId::parse("  \t ");
        assert!(matches!(result, Err(RosterError::InvalidParticipant(_))));
    }

    #[test]
    fn no_normalization_is_applied() {
        let (Ok(lower), Ok(upper)) = (
            ParticipantId::parse("a@example.com"),
            ParticipantId::parse("A@example.com"),
        ) else {
            panic!("valid identifiers rejected");
        };
        assert_ne!(lower, upper);
    }

    #[test]
    fn email_format_check() {
        assert!(is_plausible_email("tester@example.com"));
        assert!(is_plausible_email("first+tag@example.com"));
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("tester"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("tester@"));
        assert!(!is_plausible_email("a@b@c"));
        assert!(!is_plausible_email("te ster@example.com"));
    }

    #[test]
    fn parse_email_rejects_bare_name() {
        let result = ParticipantId::parse_email("alice");
        assert!(matches!(result, Err(RosterError::InvalidParticipant(_))));
        assert!(ParticipantId::parse_email("alice@example.com").is_ok());
    }
}
