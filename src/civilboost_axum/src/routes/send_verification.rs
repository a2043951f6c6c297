use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;

use civilboost_application::SendVerificationUseCase;
use civilboost_core::{PhoneNumber, SmsVerifier};

use crate::envelope::ApiResponse;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::required;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationRequest {
    pub phone_number: Option<String>,
}

#[tracing::instrument(name = "Send verification", skip_all)]
pub async fn send_verification<S>(
    State(sms_verifier): State<S>,
    ApiJson(request): ApiJson<SendVerificationRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: SmsVerifier + Clone + 'static,
{
    let phone_raw = required(request.phone_number, "Phone number is required")?;
    let phone_number =
        PhoneNumber::try_from(phone_raw).map_err(|e| ApiError::Validation(e.to_string()))?;

    let use_case = SendVerificationUseCase::new(sms_verifier);
    use_case.execute(phone_number).await?;

    Ok(Json(ApiResponse::message(
        "Verification code sent successfully",
    )))
}
