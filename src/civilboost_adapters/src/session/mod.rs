use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default session lifetime: seven days.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

#[derive(Clone)]
pub struct SessionTokenConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_seconds: i64,
}

impl SessionTokenConfig {
    pub fn new(jwt_secret: Secret<String>, token_ttl_seconds: i64) -> Self {
        Self {
            jwt_secret,
            token_ttl_seconds,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("Missing token")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// The session token carries only the user id and expiry; it is opaque to
/// clients beyond being a bearer string.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

// Create a signed session token for the given user id
pub fn generate_session_token(
    user_id: Uuid,
    config: &SessionTokenConfig,
) -> Result<String, SessionTokenError> {
    let delta = chrono::Duration::try_seconds(config.token_ttl_seconds).ok_or(
        SessionTokenError::UnexpectedError("Failed to create token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(SessionTokenError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let exp: usize = exp
        .try_into()
        .map_err(|_| SessionTokenError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
    )
    .map_err(SessionTokenError::TokenError)
}

// Check a session token's signature and expiry, returning the user id it
// was issued for
pub fn validate_session_token(
    token: &str,
    config: &SessionTokenConfig,
) -> Result<Uuid, SessionTokenError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(SessionTokenError::TokenError)?;

    Uuid::parse_str(&claims.sub).map_err(|_| SessionTokenError::InvalidToken)
}
