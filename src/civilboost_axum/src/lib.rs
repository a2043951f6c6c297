//! Axum HTTP layer for the CivilBoost credential service.
//!
//! Route handlers are generic over the port implementations they need and
//! receive them as tuple state, so the same handlers serve the Postgres
//! deployment and the in-memory test wiring. Handlers translate layer
//! errors into the `{success, message}` response envelope; nothing below
//! this crate knows about HTTP.

pub mod envelope;
pub mod error;
pub mod extract;
pub mod routes;

pub use envelope::{ApiResponse, AuthData, ForgotPasswordResponse, ProfileData};
pub use error::ApiError;
pub use extract::ApiJson;
