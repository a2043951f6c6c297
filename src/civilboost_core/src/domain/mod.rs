pub mod email;
pub mod password;
pub mod phone_number;
pub mod user;
pub mod verification_code;

use thiserror::Error;

/// Parse failures for the domain value objects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("Invalid phone number")]
    InvalidPhoneNumber,
    #[error("Invalid verification code")]
    InvalidVerificationCode,
}
