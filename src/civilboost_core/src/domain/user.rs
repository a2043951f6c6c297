use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{email::Email, password::Password, phone_number::PhoneNumber};

/// The public view of a stored user. The password hash is deliberately not
/// part of this type; it never leaves the user store.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone_number: PhoneNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub phone_verified: bool,
    pub coins_balance: i64,
    pub life_xp: i64,
    pub civilization_xp: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a user. Progression counters always start at zero;
/// the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password: Password,
    pub phone_number: PhoneNumber,
    pub date_of_birth: Option<NaiveDate>,
    pub country: Option<String>,
    pub phone_verified: bool,
}
