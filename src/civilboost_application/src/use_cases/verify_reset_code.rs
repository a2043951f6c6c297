use civilboost_core::{Email, SmsVerifier, SmsVerifierError, UserStore, UserStoreError, VerificationCode};

/// Error types specific to the verify reset code use case
#[derive(Debug, thiserror::Error)]
pub enum VerifyResetCodeError {
    #[error("SMS verifier error: {0}")]
    SmsVerifierError(#[from] SmsVerifierError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Verify reset code use case - recovery step two: a pure check against the
/// provider. Approval carries no server-side state; step three re-verifies
/// the code on its own.
pub struct VerifyResetCodeUseCase<U, S>
where
    U: UserStore,
    S: SmsVerifier,
{
    user_store: U,
    sms_verifier: S,
}

impl<U, S> VerifyResetCodeUseCase<U, S>
where
    U: UserStore,
    S: SmsVerifier,
{
    pub fn new(user_store: U, sms_verifier: S) -> Self {
        Self {
            user_store,
            sms_verifier,
        }
    }

    #[tracing::instrument(name = "VerifyResetCodeUseCase::execute", skip(self, verification_code))]
    pub async fn execute(
        &self,
        email: Email,
        verification_code: VerificationCode,
    ) -> Result<(), VerifyResetCodeError> {
        let user = self.user_store.get_user(&email).await?;

        self.sms_verifier
            .check_code(&user.phone_number, &verification_code)
            .await?;

        Ok(())
    }
}
