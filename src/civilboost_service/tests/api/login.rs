use civilboost_adapters::sms::mock_sms_verifier::MockSmsVerifier;
use serde_json::{Value, json};

use crate::helpers::{TestApp, random_email, registration_body, unique_phone};

#[tokio::test]
async fn login_with_valid_credentials_returns_user_and_token() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;
    let email = random_email();
    app.post(
        "/api/auth/register",
        &registration_body(&email, &unique_phone(), "hunter2"),
    )
    .await;

    let response = app
        .post(
            "/api/auth/login",
            &json!({ "email": email, "password": "hunter2" }),
        )
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user"]["email"], email.to_lowercase());
    assert!(body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn wrong_password_and_unknown_email_yield_identical_responses() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;
    let email = random_email();
    app.post(
        "/api/auth/register",
        &registration_body(&email, &unique_phone(), "hunter2"),
    )
    .await;

    let wrong_password = app
        .post(
            "/api/auth/login",
            &json!({ "email": email, "password": "not-hunter2" }),
        )
        .await;
    let wrong_password_status = wrong_password.status();
    let wrong_password_body: Value = wrong_password.json().await.unwrap();

    let unknown_email = app
        .post(
            "/api/auth/login",
            &json!({ "email": "ghost@example.com", "password": "hunter2" }),
        )
        .await;
    let unknown_email_status = unknown_email.status();
    let unknown_email_body: Value = unknown_email.json().await.unwrap();

    assert_eq!(wrong_password_status, 401);
    assert_eq!(wrong_password_status, unknown_email_status);
    assert_eq!(wrong_password_body, unknown_email_body);
    assert_eq!(wrong_password_body["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_with_missing_fields_is_a_400() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;

    let response = app
        .post("/api/auth/login", &json!({ "email": random_email() }))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Email and password are required");
}
