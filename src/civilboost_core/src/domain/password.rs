use secrecy::{ExposeSecret, Secret};

use super::DomainError;

/// A plaintext password in transit. The secret is only exposed at the store
/// boundary, where it is hashed or verified; it never appears in responses.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn len(&self) -> usize {
        self.0.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = DomainError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(DomainError::EmptyPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
