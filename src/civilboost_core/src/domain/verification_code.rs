use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::DomainError;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,10}$").expect("valid code regex"));

/// A one-time code as submitted by the client. Codes are generated and
/// checked by the SMS provider; this service never stores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VerificationCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_string();
        if CODE_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidVerificationCode)
        }
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
