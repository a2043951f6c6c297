use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use chrono::{DateTime, NaiveDate, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::PgPool;
use uuid::Uuid;

use civilboost_core::{
    Email, NewUser, Password, PhoneNumber, UserRecord, UserStore, UserStoreError,
};

/// Argon2id cost parameters. Tunable so operators can trade hash latency
/// against hardware; the defaults suit interactive logins.
#[derive(Debug, Clone, Copy)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: 15000,
            iterations: 2,
            parallelism: 1,
        }
    }
}

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
    hashing: HashingParams,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool, hashing: HashingParams) -> Self {
        PostgresUserStore { pool, hashing }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    date_of_birth: Option<NaiveDate>,
    country: Option<String>,
    phone_verified: bool,
    coins_balance: i64,
    life_xp: i64,
    civilization_xp: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(row.email)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let phone_number = PhoneNumber::try_from(row.phone_number)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(UserRecord {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email,
            phone_number,
            date_of_birth: row.date_of_birth,
            country: row.country,
            phone_verified: row.phone_verified,
            coins_balance: row.coins_balance,
            life_xp: row.life_xp,
            civilization_xp: row.civilization_xp,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthUserRow {
    password_hash: String,
    #[sqlx(flatten)]
    user: UserRow,
}

const PUBLIC_COLUMNS: &str = "id, first_name, last_name, email, phone_number, date_of_birth, \
     country, phone_verified, coins_balance, life_xp, civilization_xp, created_at, updated_at";

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, new_user: NewUser) -> Result<UserRecord, UserStoreError> {
        let password_hash = compute_password_hash(new_user.password.clone(), self.hashing)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let query = format!(
            r#"
                INSERT INTO users
                    (first_name, last_name, email, password_hash, phone_number,
                     date_of_birth, country, phone_verified)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING {PUBLIC_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(&new_user.first_name)
            .bind(&new_user.last_name)
            .bind(new_user.email.as_str())
            .bind(password_hash.expose_secret())
            .bind(new_user.phone_number.as_str())
            .bind(new_user.date_of_birth)
            .bind(&new_user.country)
            .bind(new_user.phone_verified)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                // The unique indexes on email and phone_number are the
                // authoritative guard against concurrent duplicate inserts.
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return UserStoreError::UserAlreadyExists;
                    }
                }
                UserStoreError::UnexpectedError(e.to_string())
            })?;

        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, email: &Email) -> Result<UserRecord, UserStoreError> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users WHERE email = $1");

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn get_user_by_id(&self, id: Uuid) -> Result<UserRecord, UserStoreError> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users WHERE id = $1");

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.try_into()
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<UserRecord, UserStoreError> {
        let query = format!(
            "SELECT password_hash, {PUBLIC_COLUMNS} FROM users WHERE email = $1"
        );

        let row = sqlx::query_as::<_, AuthUserRow>(&query)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        verify_password_hash(Secret::from(row.password_hash), password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        row.user.try_into()
    }

    #[tracing::instrument(name = "Set new password", skip_all)]
    async fn set_new_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), UserStoreError> {
        let password_hash = compute_password_hash(new_password, self.hashing)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let result = sqlx::query(
            r#"
                UPDATE users
                SET password_hash = $1, updated_at = now()
                WHERE email = $2
            "#,
        )
        .bind(password_hash.expose_secret())
        .bind(email.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

// Argon2 work happens on the blocking pool so request-handling workers are
// not starved while a hash runs.
#[tracing::instrument(name = "Verify password hash", skip_all)]
async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<(), String> {
    let current_span: tracing::Span = tracing::Span::current();
    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            Argon2::default()
                .verify_password(
                    password_candidate.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(
    password: Password,
    params: HashingParams,
) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            let hasher = Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(params.memory_kib, params.iterations, params.parallelism, None)
                    .map_err(|e| e.to_string())?,
            );
            hasher
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?
}
