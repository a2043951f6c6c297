use civilboost_core::{
    NewUser, SmsVerifier, SmsVerifierError, UserRecord, UserStore, UserStoreError,
    VerificationCode,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("SMS verifier error: {0}")]
    SmsVerifierError(#[from] SmsVerifierError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Register use case - creates a user account, optionally checking an SMS
/// verification code first
pub struct RegisterUseCase<U, S>
where
    U: UserStore,
    S: SmsVerifier,
{
    user_store: U,
    sms_verifier: S,
}

impl<U, S> RegisterUseCase<U, S>
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

    /// Execute the register use case
    ///
    /// If a verification code is supplied it is checked with the SMS
    /// provider before anything is written; the created record's
    /// `phone_verified` flag records whether that happened. Progression
    /// counters always start at zero.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, new_user, verification_code))]
    pub async fn execute(
        &self,
        mut new_user: NewUser,
        verification_code: Option<VerificationCode>,
    ) -> Result<UserRecord, RegisterError> {
        if let Some(code) = &verification_code {
            self.sms_verifier
                .check_code(&new_user.phone_number, code)
                .await?;
        }
        new_user.phone_verified = verification_code.is_some();

        let record = self.user_store.add_user(new_user).await?;
        Ok(record)
    }
}
