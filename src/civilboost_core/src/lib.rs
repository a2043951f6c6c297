pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    DomainError,
    email::Email,
    password::Password,
    phone_number::PhoneNumber,
    user::{NewUser, UserRecord},
    verification_code::VerificationCode,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{SmsVerifier, SmsVerifierError},
};
