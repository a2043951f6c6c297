use civilboost_core::{
    Email, Password, SmsVerifier, SmsVerifierError, UserStore, UserStoreError, VerificationCode,
};

/// Replacement passwords must be at least this long. Registration predates
/// this rule and is not subject to it.
pub const MIN_NEW_PASSWORD_LEN: usize = 6;

/// Error types specific to the reset password use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Password must be at least {MIN_NEW_PASSWORD_LEN} characters long")]
    PasswordTooShort,
    #[error("SMS verifier error: {0}")]
    SmsVerifierError(#[from] SmsVerifierError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Reset password use case - recovery step three: re-verify the code with
/// the provider (independently of step two), then overwrite the stored hash
pub struct ResetPasswordUseCase<U, S>
where
    U: UserStore,
    S: SmsVerifier,
{
    user_store: U,
    sms_verifier: S,
}

impl<U, S> ResetPasswordUseCase<U, S>
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

    /// Execute the reset password use case
    ///
    /// Either every check passes and the hash is overwritten, or nothing is
    /// mutated. No session token is issued; the user logs in again with the
    /// new password.
    #[tracing::instrument(
        name = "ResetPasswordUseCase::execute",
        skip(self, new_password, verification_code)
    )]
    pub async fn execute(
        &self,
        email: Email,
        new_password: Password,
        verification_code: VerificationCode,
    ) -> Result<(), ResetPasswordError> {
        if new_password.len() < MIN_NEW_PASSWORD_LEN {
            return Err(ResetPasswordError::PasswordTooShort);
        }

        let user = self.user_store.get_user(&email).await?;

        self.sms_verifier
            .check_code(&user.phone_number, &verification_code)
            .await?;

        self.user_store.set_new_password(&email, new_password).await?;

        Ok(())
    }
}
