use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use secrecy::ExposeSecret;
use tokio::sync::RwLock;
use uuid::Uuid;

use civilboost_core::{
    Email, NewUser, Password, UserRecord, UserStore, UserStoreError,
};

/// In-memory user store. Passwords are kept and compared in plaintext, so
/// this adapter is for tests and local development only.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, StoredUser>>>,
}

struct StoredUser {
    record: UserRecord,
    password: Password,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, new_user: NewUser) -> Result<UserRecord, UserStoreError> {
        let mut users = self.users.write().await;
        let duplicate = users.contains_key(&new_user.email)
            || users
                .values()
                .any(|stored| stored.record.phone_number == new_user.phone_number);
        if duplicate {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email.clone(),
            phone_number: new_user.phone_number,
            date_of_birth: new_user.date_of_birth,
            country: new_user.country,
            phone_verified: new_user.phone_verified,
            coins_balance: 0,
            life_xp: 0,
            civilization_xp: 0,
            created_at: now,
            updated_at: now,
        };
        users.insert(
            new_user.email,
            StoredUser {
                record: record.clone(),
                password: new_user.password,
            },
        );
        Ok(record)
    }

    async fn get_user(&self, email: &Email) -> Result<UserRecord, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .map(|stored| stored.record.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<UserRecord, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|stored| stored.record.id == id)
            .map(|stored| stored.record.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<UserRecord, UserStoreError> {
        let users = self.users.read().await;
        let stored = users.get(email).ok_or(UserStoreError::UserNotFound)?;

        if stored.password.as_ref().expose_secret() != password.as_ref().expose_secret() {
            return Err(UserStoreError::IncorrectPassword);
        }

        Ok(stored.record.clone())
    }

    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let stored = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;

        stored.password = new_password;
        stored.record.updated_at = Utc::now();
        Ok(())
    }
}
