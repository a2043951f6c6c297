use civilboost_core::{PhoneNumber, SmsVerifier, SmsVerifierError};

/// Error types specific to the send verification use case
#[derive(Debug, thiserror::Error)]
pub enum SendVerificationError {
    #[error("SMS verifier error: {0}")]
    SmsVerifierError(#[from] SmsVerifierError),
}

/// Send verification use case - asks the provider to text a one-time code
pub struct SendVerificationUseCase<S>
where
    S: SmsVerifier,
{
    sms_verifier: S,
}

impl<S> SendVerificationUseCase<S>
where
    S: SmsVerifier,
{
    pub fn new(sms_verifier: S) -> Self {
        Self { sms_verifier }
    }

    #[tracing::instrument(name = "SendVerificationUseCase::execute", skip(self))]
    pub async fn execute(&self, phone_number: PhoneNumber) -> Result<(), SendVerificationError> {
        self.sms_verifier.start_verification(&phone_number).await?;
        Ok(())
    }
}
