use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;

use civilboost_application::VerifyResetCodeUseCase;
use civilboost_core::{Email, SmsVerifier, UserStore, VerificationCode};

use crate::envelope::ApiResponse;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::required;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResetCodeRequest {
    pub email: Option<String>,
    pub verification_code: Option<String>,
}

const REQUIRED_FIELDS: &str = "Email and verification code are required";
const INVALID_CODE: &str = "Invalid or expired verification code";

#[tracing::instrument(name = "Verify reset code", skip_all)]
pub async fn verify_reset_code<U, S>(
    State((user_store, sms_verifier)): State<(U, S)>,
    ApiJson(request): ApiJson<VerifyResetCodeRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SmsVerifier + Clone + 'static,
{
    let email_raw = required(request.email, REQUIRED_FIELDS)?;
    let code_raw = required(request.verification_code, REQUIRED_FIELDS)?;

    let email = Email::try_from(email_raw)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;
    let verification_code = VerificationCode::try_from(code_raw)
        .map_err(|_| ApiError::Verification(INVALID_CODE.to_string()))?;

    let use_case = VerifyResetCodeUseCase::new(user_store, sms_verifier);
    use_case.execute(email, verification_code).await?;

    Ok(Json(ApiResponse::message("Verification code is valid")))
}
