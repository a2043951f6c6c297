use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use secrecy::Secret;
use serde::Deserialize;

use civilboost_adapters::session::{SessionTokenConfig, generate_session_token};
use civilboost_application::RegisterUseCase;
use civilboost_core::{
    Email, NewUser, Password, PhoneNumber, SmsVerifier, UserStore, VerificationCode,
};

use crate::envelope::{ApiResponse, AuthData};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::{required, required_secret};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub country: Option<String>,
    pub verification_code: Option<String>,
}

const REQUIRED_FIELDS: &str = "Please provide all required fields";

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, S>(
    State((user_store, sms_verifier, token_config)): State<(U, S, SessionTokenConfig)>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SmsVerifier + Clone + 'static,
{
    let first_name = required(request.first_name, REQUIRED_FIELDS)?;
    let last_name = required(request.last_name, REQUIRED_FIELDS)?;
    let email_raw = required(request.email, REQUIRED_FIELDS)?;
    let password_raw = required_secret(request.password, REQUIRED_FIELDS)?;
    let phone_raw = required(request.phone_number, REQUIRED_FIELDS)?;

    let email = Email::try_from(email_raw).map_err(|e| ApiError::Validation(e.to_string()))?;
    let password =
        Password::try_from(password_raw).map_err(|e| ApiError::Validation(e.to_string()))?;
    let phone_number =
        PhoneNumber::try_from(phone_raw).map_err(|e| ApiError::Validation(e.to_string()))?;

    // An empty code means "none supplied". A syntactically impossible one
    // can never be approved, so it reports the same failure an unapproved
    // code would.
    let verification_code = request
        .verification_code
        .filter(|code| !code.trim().is_empty())
        .map(VerificationCode::try_from)
        .transpose()
        .map_err(|_| ApiError::Verification("Invalid verification code".to_string()))?;

    let new_user = NewUser {
        first_name,
        last_name,
        email,
        password,
        phone_number,
        date_of_birth: request.date_of_birth,
        country: request.country,
        phone_verified: false,
    };

    let use_case = RegisterUseCase::new(user_store, sms_verifier);
    let record = use_case.execute(new_user, verification_code).await?;

    let token = generate_session_token(record.id, &token_config)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(
            "User registered successfully",
            AuthData {
                user: record,
                token,
            },
        )),
    ))
}
