use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;

use civilboost_adapters::session::{SessionTokenConfig, generate_session_token};
use civilboost_application::LoginUseCase;
use civilboost_core::{Email, Password, UserStore};

use crate::envelope::{ApiResponse, AuthData};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::{required, required_secret};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
}

const REQUIRED_FIELDS: &str = "Email and password are required";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U>(
    State((user_store, token_config)): State<(U, SessionTokenConfig)>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    let email_raw = required(request.email, REQUIRED_FIELDS)?;
    let password_raw = required_secret(request.password, REQUIRED_FIELDS)?;

    // A malformed email cannot belong to any account; reporting it as bad
    // credentials keeps the response indistinguishable from a wrong
    // password.
    let email =
        Email::try_from(email_raw).map_err(|_| ApiError::Auth(INVALID_CREDENTIALS.to_string()))?;
    let password = Password::try_from(password_raw)
        .map_err(|_| ApiError::Auth(INVALID_CREDENTIALS.to_string()))?;

    let use_case = LoginUseCase::new(user_store);
    let record = use_case.execute(email, password).await?;

    let token = generate_session_token(record.id, &token_config)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(ApiResponse::with_data(
        "Login successful",
        AuthData {
            user: record,
            token,
        },
    )))
}
