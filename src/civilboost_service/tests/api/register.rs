use civilboost_adapters::sms::mock_sms_verifier::MockSmsVerifier;
use serde_json::{Value, json};

use crate::helpers::{TestApp, random_email, registration_body, unique_phone};

#[tokio::test]
async fn register_creates_user_with_zero_counters_and_a_working_token() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;
    let email = random_email();

    let response = app
        .post(
            "/api/auth/register",
            &registration_body(&email, &unique_phone(), "hunter2"),
        )
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let user = &body["data"]["user"];
    assert_eq!(user["email"], email.to_lowercase());
    assert_eq!(user["coins_balance"], 0);
    assert_eq!(user["life_xp"], 0);
    assert_eq!(user["civilization_xp"], 0);
    assert_eq!(user["phone_verified"], false);
    assert!(user.get("password_hash").is_none());

    // the issued token opens the profile endpoint
    let token = body["data"]["token"].as_str().unwrap();
    let profile = app.get_with_bearer("/api/auth/profile", token).await;
    assert_eq!(profile.status(), 200);
    let profile_body: Value = profile.json().await.unwrap();
    assert_eq!(profile_body["data"]["user"]["email"], email.to_lowercase());
}

#[tokio::test]
async fn register_with_approved_code_marks_phone_verified() {
    let app = TestApp::spawn(MockSmsVerifier::approving("123456")).await;
    let mut body = registration_body(&random_email(), &unique_phone(), "hunter2");
    body["verificationCode"] = json!("123456");

    let response = app.post("/api/auth/register", &body).await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["user"]["phone_verified"], true);
}

#[tokio::test]
async fn register_with_rejected_code_is_a_400() {
    let app = TestApp::spawn(MockSmsVerifier::approving("123456")).await;
    let mut body = registration_body(&random_email(), &unique_phone(), "hunter2");
    body["verificationCode"] = json!("654321");

    let response = app.post("/api/auth/register", &body).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid verification code");
}

#[tokio::test]
async fn register_with_missing_fields_is_a_400() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;

    let response = app
        .post(
            "/api/auth/register",
            &json!({ "firstName": "Ada", "email": random_email() }),
        )
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Please provide all required fields");
}

#[tokio::test]
async fn registering_the_same_email_twice_is_a_conflict() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;
    let email = random_email();

    let first = app
        .post(
            "/api/auth/register",
            &registration_body(&email, &unique_phone(), "hunter2"),
        )
        .await;
    assert_eq!(first.status(), 201);

    // different phone number, same email
    let second = app
        .post(
            "/api/auth/register",
            &registration_body(&email, &unique_phone(), "hunter2"),
        )
        .await;

    assert_eq!(second.status(), 409);
    let body: Value = second.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "User with this email or phone number already exists"
    );
}

#[tokio::test]
async fn profile_without_a_token_is_a_401() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;

    let response = app.get("/api/auth/profile").await;

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Access token required");
}

#[tokio::test]
async fn profile_with_a_garbage_token_is_a_401() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;

    let response = app.get_with_bearer("/api/auth/profile", "not.a.token").await;

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid or expired token");
}
