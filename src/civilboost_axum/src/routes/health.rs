use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::error::ErrorResponse;

/// Liveness probe: answers 200 whenever the process is up.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "service": "CivilBoost API",
    }))
}

/// Service banner with an endpoint listing, kept for clients that probe
/// the root path.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "CivilBoost API Server is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/api/auth",
            "register": "/api/auth/register",
            "login": "/api/auth/login",
            "sendVerification": "/api/auth/send-verification",
            "profile": "/api/auth/profile",
        },
    }))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            message: "Route not found".to_string(),
        }),
    )
}
