use civilboost_adapters::sms::mock_sms_verifier::MockSmsVerifier;
use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn health_check_returns_200_with_status_ok() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["service"], "CivilBoost API");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn root_banner_lists_the_auth_endpoints() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;

    let response = app.get("/").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["endpoints"]["register"], "/api/auth/register");
    assert_eq!(body["endpoints"]["login"], "/api/auth/login");
}

#[tokio::test]
async fn unknown_routes_answer_404_in_the_envelope() {
    let app = TestApp::spawn(MockSmsVerifier::new()).await;

    let response = app.get("/api/auth/nope").await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route not found");
}
