use civilboost_core::{Email, Password, UserRecord, UserStore, UserStoreError};

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password collapse into this one variant so
    /// that callers cannot distinguish them (account enumeration guard).
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Login use case - verifies credentials and returns the matching record
pub struct LoginUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> LoginUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<UserRecord, LoginError> {
        match self.user_store.authenticate_user(&email, &password).await {
            Ok(record) => Ok(record),
            Err(UserStoreError::UserNotFound) | Err(UserStoreError::IncorrectPassword) => {
                Err(LoginError::InvalidCredentials)
            }
            Err(e) => Err(LoginError::UserStoreError(e)),
        }
    }
}
