use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    email::Email,
    password::Password,
    user::{NewUser, UserRecord},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistent store of user records, keyed by unique email and unique phone
/// number. Password hashing and verification happen behind this port; the
/// hash is never handed back to callers.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. The store's uniqueness constraints are the
    /// authoritative duplicate guard; a concurrent insert of the same email
    /// or phone number surfaces as `UserAlreadyExists`.
    async fn add_user(&self, new_user: NewUser) -> Result<UserRecord, UserStoreError>;
    async fn get_user(&self, email: &Email) -> Result<UserRecord, UserStoreError>;
    async fn get_user_by_id(&self, id: Uuid) -> Result<UserRecord, UserStoreError>;
    /// Verify credentials against the stored hash. Unknown email and wrong
    /// password are reported as distinct errors; collapsing them into one
    /// indistinguishable failure is the HTTP layer's job.
    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<UserRecord, UserStoreError>;
    /// Overwrite the stored password hash and bump `updated_at`.
    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError>;
}
