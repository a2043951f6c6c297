use std::sync::atomic::{AtomicU32, Ordering};

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use secrecy::Secret;
use serde_json::{Value, json};

use civilboost_adapters::{
    persistence::hashmap_user_store::HashMapUserStore,
    session::SessionTokenConfig,
    sms::mock_sms_verifier::MockSmsVerifier,
};
use civilboost_service::ApiService;

/// A running instance of the API on an ephemeral port, backed by the
/// in-memory store and a scripted SMS verifier.
pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

static PHONE_COUNTER: AtomicU32 = AtomicU32::new(0);

impl TestApp {
    pub async fn spawn(sms_verifier: MockSmsVerifier) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let token_config = SessionTokenConfig::new(Secret::from("test-secret".to_string()), 600);
        let service = ApiService::new(HashMapUserStore::new(), sms_verifier, token_config);

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_with_bearer(&self, path: &str, token: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", self.address, path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// A unique, valid phone number per call.
pub fn unique_phone() -> String {
    let n = PHONE_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("+1555{n:07}")
}

pub fn registration_body(email: &str, phone: &str, password: &str) -> Value {
    json!({
        "firstName": FirstName().fake::<String>(),
        "lastName": LastName().fake::<String>(),
        "email": email,
        "password": password,
        "phoneNumber": phone,
    })
}

pub fn random_email() -> String {
    SafeEmail().fake()
}
