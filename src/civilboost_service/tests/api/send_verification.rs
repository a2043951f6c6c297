use civilboost_adapters::sms::mock_sms_verifier::MockSmsVerifier;
use serde_json::{Value, json};

use crate::helpers::{TestApp, unique_phone};

#[tokio::test]
async fn send_verification_reports_provider_success() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;

    let response = app
        .post(
            "/api/auth/send-verification",
            &json!({ "phoneNumber": unique_phone() }),
        )
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Verification code sent successfully");
}

#[tokio::test]
async fn send_verification_without_a_number_is_a_400() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;

    let response = app.post("/api/auth/send-verification", &json!({})).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Phone number is required");
}
