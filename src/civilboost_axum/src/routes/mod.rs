pub mod forgot_password;
pub mod health;
pub mod login;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod send_verification;
pub mod verify_reset_code;

pub use forgot_password::forgot_password;
pub use health::{health, not_found, root};
pub use login::login;
pub use profile::profile;
pub use register::register;
pub use reset_password::reset_password;
pub use send_verification::send_verification;
pub use verify_reset_code::verify_reset_code;

use secrecy::{ExposeSecret, Secret};

use crate::error::ApiError;

// Presence checks for request fields. Absent and blank are treated the
// same, and the message is the route's own wording, matching the API the
// clients were built against.
pub(crate) fn required(field: Option<String>, message: &str) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::Validation(message.to_string())),
    }
}

pub(crate) fn required_secret(
    field: Option<Secret<String>>,
    message: &str,
) -> Result<Secret<String>, ApiError> {
    match field {
        Some(value) if !value.expose_secret().is_empty() => Ok(value),
        _ => Err(ApiError::Validation(message.to_string())),
    }
}
