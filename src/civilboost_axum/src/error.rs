use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use civilboost_adapters::session::SessionTokenError;
use civilboost_application::{
    ForgotPasswordError, GetProfileError, LoginError, RegisterError, ResetPasswordError,
    SendVerificationError, VerifyResetCodeError,
};
use civilboost_core::{SmsVerifierError, UserStoreError};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// API-boundary error taxonomy. Every handler failure becomes one of these,
/// which in turn becomes a status code plus the `{success:false, message}`
/// envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    /// Deliberately non-specific: never reveals whether the email or the
    /// password was at fault.
    #[error("{0}")]
    Auth(String),

    #[error("User with this email or phone number already exists")]
    Conflict,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Verification(String),

    #[error("{0}")]
    Provider(String),

    /// The payload is the internal detail; it is logged, and only shown to
    /// clients in debug builds.
    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            ApiError::Validation(_) | ApiError::Verification(_) | ApiError::Provider(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            ApiError::Auth(_) => (StatusCode::UNAUTHORIZED, self.to_string()),

            ApiError::Conflict => (StatusCode::CONFLICT, self.to_string()),

            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),

            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "request failed");
                let message = if cfg!(debug_assertions) {
                    detail.clone()
                } else {
                    self.to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
        });

        (status_code, body).into_response()
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            // Any failure to get the code approved reads the same to the
            // caller; the register flow never exposes provider trouble.
            RegisterError::SmsVerifierError(_) => {
                ApiError::Verification("Invalid verification code".to_string())
            }
            RegisterError::UserStoreError(UserStoreError::UserAlreadyExists) => ApiError::Conflict,
            RegisterError::UserStoreError(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::Auth("Invalid credentials".to_string()),
            LoginError::UserStoreError(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SendVerificationError> for ApiError {
    fn from(error: SendVerificationError) -> Self {
        match error {
            SendVerificationError::SmsVerifierError(_) => {
                ApiError::Provider("Failed to send verification code".to_string())
            }
        }
    }
}

impl From<GetProfileError> for ApiError {
    fn from(error: GetProfileError) -> Self {
        match error {
            GetProfileError::UserStoreError(UserStoreError::UserNotFound) => {
                ApiError::NotFound("User not found".to_string())
            }
            GetProfileError::UserStoreError(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ForgotPasswordError> for ApiError {
    fn from(error: ForgotPasswordError) -> Self {
        match error {
            ForgotPasswordError::NoMatch => {
                ApiError::NotFound("No account found with the provided information".to_string())
            }
            ForgotPasswordError::SmsVerifierError(_) => {
                ApiError::Provider("Failed to send verification code".to_string())
            }
            ForgotPasswordError::UserStoreError(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<VerifyResetCodeError> for ApiError {
    fn from(error: VerifyResetCodeError) -> Self {
        match error {
            VerifyResetCodeError::UserStoreError(UserStoreError::UserNotFound) => {
                ApiError::NotFound("User not found".to_string())
            }
            VerifyResetCodeError::SmsVerifierError(_) => {
                ApiError::Verification("Invalid or expired verification code".to_string())
            }
            VerifyResetCodeError::UserStoreError(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ResetPasswordError> for ApiError {
    fn from(error: ResetPasswordError) -> Self {
        match error {
            ResetPasswordError::PasswordTooShort => {
                ApiError::Validation("Password must be at least 6 characters long".to_string())
            }
            ResetPasswordError::UserStoreError(UserStoreError::UserNotFound) => {
                ApiError::NotFound("User not found".to_string())
            }
            ResetPasswordError::SmsVerifierError(SmsVerifierError::CodeRejected) => {
                ApiError::Verification("Invalid or expired verification code".to_string())
            }
            ResetPasswordError::SmsVerifierError(SmsVerifierError::Provider(_)) => {
                ApiError::Verification("Invalid or expired verification code".to_string())
            }
            ResetPasswordError::UserStoreError(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SessionTokenError> for ApiError {
    fn from(error: SessionTokenError) -> Self {
        match error {
            SessionTokenError::MissingToken => ApiError::Auth("Access token required".to_string()),
            SessionTokenError::InvalidToken | SessionTokenError::TokenError(_) => {
                ApiError::Auth("Invalid or expired token".to_string())
            }
            SessionTokenError::UnexpectedError(e) => ApiError::Internal(e),
        }
    }
}
