use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{phone_number::PhoneNumber, verification_code::VerificationCode};

// SmsVerifier port trait and errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SmsVerifierError {
    #[error("Verification code rejected")]
    CodeRejected,
    #[error("SMS provider error: {0}")]
    Provider(String),
}

/// External one-time-code service. The provider owns code generation,
/// delivery, expiry and the approve/reject decision; this service keeps no
/// local copy of valid codes and never retries a failed call.
#[async_trait]
pub trait SmsVerifier: Send + Sync {
    /// Ask the provider to send a fresh code to `phone`.
    async fn start_verification(&self, phone: &PhoneNumber) -> Result<(), SmsVerifierError>;
    /// Ask the provider whether `code` is currently valid for `phone`.
    /// A definite "no" is `CodeRejected`; transport or upstream failures are
    /// `Provider`.
    async fn check_code(
        &self,
        phone: &PhoneNumber,
        code: &VerificationCode,
    ) -> Result<(), SmsVerifierError>;
}
