use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::DomainError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A validated email address, normalized to lowercase at parse time so that
/// lookups and uniqueness are case-insensitive by construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_lowercase();
        if EMAIL_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidEmail)
        }
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_lowercases_mixed_case_addresses() {
        let email = Email::try_from("Jane.Doe@Example.COM".to_string()).unwrap();
        assert_eq!(email.as_str(), "jane.doe@example.com");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let email = Email::try_from("  user@example.com ".to_string()).unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for candidate in ["", "plainstring", "missing@domain", "@example.com", "a b@c.d"] {
            assert_eq!(
                Email::try_from(candidate.to_string()),
                Err(DomainError::InvalidEmail),
                "expected {candidate:?} to be rejected"
            );
        }
    }
}
