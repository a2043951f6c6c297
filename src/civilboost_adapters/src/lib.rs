pub mod config;
pub mod persistence;
pub mod session;
pub mod sms;

// Re-export the concrete adapters for convenience
pub use config::{AllowedOrigins, Settings};
pub use persistence::{hashmap_user_store::HashMapUserStore, postgres_user_store::PostgresUserStore};
pub use session::{
    generate_session_token, validate_session_token, SessionTokenConfig, SessionTokenError,
};
pub use sms::{mock_sms_verifier::MockSmsVerifier, twilio_verify_client::TwilioVerifyClient};
