use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;

use civilboost_application::ForgotPasswordUseCase;
use civilboost_core::{Email, SmsVerifier, UserStore};

use crate::envelope::ForgotPasswordResponse;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::required;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

const REQUIRED_FIELDS: &str = "Please provide email, first name, and last name";
const NO_MATCH: &str = "No account found with the provided information";

#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<U, S>(
    State((user_store, sms_verifier)): State<(U, S)>,
    ApiJson(request): ApiJson<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    S: SmsVerifier + Clone + 'static,
{
    let email_raw = required(request.email, REQUIRED_FIELDS)?;
    let first_name = required(request.first_name, REQUIRED_FIELDS)?;
    let last_name = required(request.last_name, REQUIRED_FIELDS)?;

    // A malformed email matches no account, same as an unknown one.
    let email = Email::try_from(email_raw).map_err(|_| ApiError::NotFound(NO_MATCH.to_string()))?;

    let use_case = ForgotPasswordUseCase::new(user_store, sms_verifier);
    let masked_phone = use_case.execute(email, &first_name, &last_name).await?;

    Ok(Json(ForgotPasswordResponse {
        success: true,
        message: "Verification code sent to your registered phone number".to_string(),
        masked_phone,
    }))
}
