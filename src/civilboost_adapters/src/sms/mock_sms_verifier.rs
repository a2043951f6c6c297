use civilboost_core::{PhoneNumber, SmsVerifier, SmsVerifierError, VerificationCode};

/// Stand-in verifier for tests and local development. Sends always succeed;
/// by default every code is approved, or construct with [`approving`] to
/// accept exactly one code.
///
/// [`approving`]: MockSmsVerifier::approving
#[derive(Debug, Clone, Default)]
pub struct MockSmsVerifier {
    approved_code: Option<String>,
}

impl MockSmsVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn approving(code: impl Into<String>) -> Self {
        Self {
            approved_code: Some(code.into()),
        }
    }
}

#[async_trait::async_trait]
impl SmsVerifier for MockSmsVerifier {
    async fn start_verification(&self, _phone: &PhoneNumber) -> Result<(), SmsVerifierError> {
        Ok(())
    }

    async fn check_code(
        &self,
        _phone: &PhoneNumber,
        code: &VerificationCode,
    ) -> Result<(), SmsVerifierError> {
        match &self.approved_code {
            None => Ok(()),
            Some(approved) if approved == code.as_str() => Ok(()),
            Some(_) => Err(SmsVerifierError::CodeRejected),
        }
    }
}
