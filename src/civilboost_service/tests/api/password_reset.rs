use civilboost_adapters::sms::mock_sms_verifier::MockSmsVerifier;
use serde_json::{Value, json};

use crate::helpers::{TestApp, random_email};

const PHONE: &str = "+12345678901";

fn registration(email: &str) -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": email,
        "password": "old-password",
        "phoneNumber": PHONE,
    })
}

async fn login_status(app: &TestApp, email: &str, password: &str) -> u16 {
    app.post(
        "/api/auth/login",
        &json!({ "email": email, "password": password }),
    )
    .await
    .status()
    .as_u16()
}

#[tokio::test]
async fn full_reset_flow_swaps_which_password_logs_in() {
    let app = TestApp::spawn(MockSmsVerifier::approving("123456")).await;
    let email = random_email();
    assert_eq!(
        app.post("/api/auth/register", &registration(&email)).await.status(),
        201
    );

    // step 1: prove the identity triple, code goes out by SMS
    let step1 = app
        .post(
            "/api/auth/forgot-password",
            &json!({ "email": email, "firstName": "Ada", "lastName": "Lovelace" }),
        )
        .await;
    assert_eq!(step1.status(), 200);
    let body: Value = step1.json().await.unwrap();
    assert_eq!(body["maskedPhone"], "+12*****8901");

    // step 2: the code checks out
    let step2 = app
        .post(
            "/api/auth/verify-reset-code",
            &json!({ "email": email, "verificationCode": "123456" }),
        )
        .await;
    assert_eq!(step2.status(), 200);
    let body: Value = step2.json().await.unwrap();
    assert_eq!(body["message"], "Verification code is valid");

    // step 3: the code is re-verified and the hash replaced
    let step3 = app
        .post(
            "/api/auth/reset-password",
            &json!({ "email": email, "newPassword": "new-password", "verificationCode": "123456" }),
        )
        .await;
    assert_eq!(step3.status(), 200);
    let body: Value = step3.json().await.unwrap();
    assert_eq!(body["message"], "Password reset successfully");

    assert_eq!(login_status(&app, &email, "old-password").await, 401);
    assert_eq!(login_status(&app, &email, "new-password").await, 200);
}

#[tokio::test]
async fn holder_of_a_valid_code_may_skip_the_verify_step() {
    // Deliberate consequence of the stateless flow: step 3 only needs the
    // (email, code) pair, not a prior step-2 call.
    let app = TestApp::spawn(MockSmsVerifier::approving("123456")).await;
    let email = random_email();
    app.post("/api/auth/register", &registration(&email)).await;

    let response = app
        .post(
            "/api/auth/reset-password",
            &json!({ "email": email, "newPassword": "new-password", "verificationCode": "123456" }),
        )
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(login_status(&app, &email, "new-password").await, 200);
}

#[tokio::test]
async fn name_mismatch_and_unknown_email_yield_identical_404s() {
    let app = TestApp::spawn(MockSmsVerifier::approving("123456")).await;
    let email = random_email();
    app.post("/api/auth/register", &registration(&email)).await;

    let mismatch = app
        .post(
            "/api/auth/forgot-password",
            &json!({ "email": email, "firstName": "ada", "lastName": "Lovelace" }),
        )
        .await;
    let mismatch_status = mismatch.status();
    let mismatch_body: Value = mismatch.json().await.unwrap();

    let unknown = app
        .post(
            "/api/auth/forgot-password",
            &json!({ "email": "ghost@example.com", "firstName": "Ada", "lastName": "Lovelace" }),
        )
        .await;
    let unknown_status = unknown.status();
    let unknown_body: Value = unknown.json().await.unwrap();

    assert_eq!(mismatch_status, 404);
    assert_eq!(mismatch_status, unknown_status);
    assert_eq!(mismatch_body, unknown_body);
}

#[tokio::test]
async fn rejected_code_fails_step_two_with_no_side_effects() {
    let app = TestApp::spawn(MockSmsVerifier::approving("123456")).await;
    let email = random_email();
    app.post("/api/auth/register", &registration(&email)).await;

    let response = app
        .post(
            "/api/auth/verify-reset-code",
            &json!({ "email": email, "verificationCode": "654321" }),
        )
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid or expired verification code");

    // the old password still works
    assert_eq!(login_status(&app, &email, "old-password").await, 200);
}

#[tokio::test]
async fn short_new_password_is_rejected_and_the_old_one_survives() {
    let app = TestApp::spawn(MockSmsVerifier::approving("123456")).await;
    let email = random_email();
    app.post("/api/auth/register", &registration(&email)).await;

    let response = app
        .post(
            "/api/auth/reset-password",
            &json!({ "email": email, "newPassword": "five5", "verificationCode": "123456" }),
        )
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Password must be at least 6 characters long");

    assert_eq!(login_status(&app, &email, "old-password").await, 200);
    assert_eq!(login_status(&app, &email, "five5").await, 401);
}
