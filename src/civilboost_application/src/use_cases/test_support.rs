use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use uuid::Uuid;

use civilboost_core::{
    Email, NewUser, Password, PhoneNumber, SmsVerifier, SmsVerifierError, UserRecord, UserStore,
    UserStoreError, VerificationCode,
};

// In-memory user store for use-case tests. Plaintext password comparison;
// hashing is an adapter concern.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Email, (UserRecord, Password)>>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn add_user(&self, new_user: NewUser) -> Result<UserRecord, UserStoreError> {
        let mut users = self.users.write().await;
        let duplicate = users.contains_key(&new_user.email)
            || users
                .values()
                .any(|(record, _)| record.phone_number == new_user.phone_number);
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
        users.insert(new_user.email, (record.clone(), new_user.password));
        Ok(record)
    }

    async fn get_user(&self, email: &Email) -> Result<UserRecord, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .map(|(record, _)| record.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<UserRecord, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|(record, _)| record.id == id)
            .map(|(record, _)| record.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<UserRecord, UserStoreError> {
        let users = self.users.read().await;
        let (record, stored) = users.get(email).ok_or(UserStoreError::UserNotFound)?;
        if stored.as_ref().expose_secret() != password.as_ref().expose_secret() {
            return Err(UserStoreError::IncorrectPassword);
        }
        Ok(record.clone())
    }

    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let (record, password) = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;
        *password = new_password;
        record.updated_at = Utc::now();
        Ok(())
    }
}

// Scripted SMS verifier: approves one known code, records every send.
#[derive(Clone)]
pub struct ScriptedSmsVerifier {
    approved_code: Option<String>,
    provider_down: bool,
    pub sent_to: Arc<RwLock<Vec<PhoneNumber>>>,
}

impl ScriptedSmsVerifier {
    pub fn approving(code: &str) -> Self {
        Self {
            approved_code: Some(code.to_string()),
            provider_down: false,
            sent_to: Arc::default(),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            approved_code: None,
            provider_down: false,
            sent_to: Arc::default(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            approved_code: None,
            provider_down: true,
            sent_to: Arc::default(),
        }
    }
}

#[async_trait]
impl SmsVerifier for ScriptedSmsVerifier {
    async fn start_verification(&self, phone: &PhoneNumber) -> Result<(), SmsVerifierError> {
        if self.provider_down {
            return Err(SmsVerifierError::Provider("provider unavailable".into()));
        }
        self.sent_to.write().await.push(phone.clone());
        Ok(())
    }

    async fn check_code(
        &self,
        _phone: &PhoneNumber,
        code: &VerificationCode,
    ) -> Result<(), SmsVerifierError> {
        if self.provider_down {
            return Err(SmsVerifierError::Provider("provider unavailable".into()));
        }
        match &self.approved_code {
            Some(approved) if approved == code.as_str() => Ok(()),
            _ => Err(SmsVerifierError::CodeRejected),
        }
    }
}

pub fn email(raw: &str) -> Email {
    Email::try_from(raw.to_string()).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn phone(raw: &str) -> PhoneNumber {
    PhoneNumber::try_from(raw.to_string()).unwrap()
}

pub fn code(raw: &str) -> VerificationCode {
    VerificationCode::try_from(raw.to_string()).unwrap()
}

pub fn new_user(email_raw: &str, phone_raw: &str, password_raw: &str) -> NewUser {
    NewUser {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email(email_raw),
        password: password(password_raw),
        phone_number: phone(phone_raw),
        date_of_birth: None,
        country: None,
        phone_verified: false,
    }
}
