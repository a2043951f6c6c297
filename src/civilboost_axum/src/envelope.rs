use serde::Serialize;

use civilboost_core::UserRecord;

/// The response envelope every endpoint answers with: `success`, an
/// optional human-readable `message`, and an optional `data` payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn data_only(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }
}

/// Payload returned by register and login: the user plus a fresh session
/// token.
#[derive(Debug, Serialize)]
pub struct AuthData {
    pub user: UserRecord,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileData {
    pub user: UserRecord,
}

/// Recovery step one answers outside the generic envelope: the masked
/// phone rides at the top level, the shape the original API committed to.
#[derive(Debug, Serialize)]
pub struct ForgotPasswordResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "maskedPhone")]
    pub masked_phone: String,
}
