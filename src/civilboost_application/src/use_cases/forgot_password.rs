use civilboost_core::{Email, SmsVerifier, SmsVerifierError, UserStore, UserStoreError};

/// Error types specific to the forgot password use case
#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    /// No record matches the (email, first name, last name) triple. A name
    /// mismatch on an existing account reports the same error as an unknown
    /// email.
    #[error("No account found with the provided information")]
    NoMatch,
    #[error("SMS verifier error: {0}")]
    SmsVerifierError(#[from] SmsVerifierError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Forgot password use case - recovery step one: prove an identity triple,
/// then have the provider text a code to the phone number on file
pub struct ForgotPasswordUseCase<U, S>
where
    U: UserStore,
    S: SmsVerifier,
{
    user_store: U,
    sms_verifier: S,
}

impl<U, S> ForgotPasswordUseCase<U, S>
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

    /// Execute the forgot password use case
    ///
    /// Name comparison is exact and case-sensitive; only the email is
    /// case-insensitive (normalized at parse time). On success the caller
    /// gets the masked phone number the code was sent to, never the full
    /// number.
    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip(self, first_name, last_name))]
    pub async fn execute(
        &self,
        email: Email,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, ForgotPasswordError> {
        let user = match self.user_store.get_user(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(ForgotPasswordError::NoMatch),
            Err(e) => return Err(ForgotPasswordError::UserStoreError(e)),
        };

        if user.first_name != first_name || user.last_name != last_name {
            return Err(ForgotPasswordError::NoMatch);
        }

        self.sms_verifier
            .start_verification(&user.phone_number)
            .await?;

        Ok(user.phone_number.masked())
    }
}
