use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;

use civilboost_application::ResetPasswordUseCase;
use civilboost_core::{Email, Password, SmsVerifier, UserStore, VerificationCode};

use crate::envelope::ApiResponse;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::{required, required_secret};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: Option<String>,
    pub new_password: Option<Secret<String>>,
    pub verification_code: Option<String>,
}

const REQUIRED_FIELDS: &str = "Email, new password, and verification code are required";
const INVALID_CODE: &str = "Invalid or expired verification code";

#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<U, S>(
    State((user_store, sms_verifier)): State<(U, S)>,
    ApiJson(request): ApiJson<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SmsVerifier + Clone + 'static,
{
    let email_raw = required(request.email, REQUIRED_FIELDS)?;
    let password_raw = required_secret(request.new_password, REQUIRED_FIELDS)?;
    let code_raw = required(request.verification_code, REQUIRED_FIELDS)?;

    let email = Email::try_from(email_raw)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;
    let new_password = Password::try_from(password_raw)
        .map_err(|_| ApiError::Validation(REQUIRED_FIELDS.to_string()))?;
    let verification_code = VerificationCode::try_from(code_raw)
        .map_err(|_| ApiError::Verification(INVALID_CODE.to_string()))?;

    let use_case = ResetPasswordUseCase::new(user_store, sms_verifier);
    use_case
        .execute(email, new_password, verification_code)
        .await?;

    Ok(Json(ApiResponse::message("Password reset successfully")))
}
