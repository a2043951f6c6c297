use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use civilboost_core::{PhoneNumber, SmsVerifier, SmsVerifierError, VerificationCode};

/// Client for the Twilio Verify v2 API. The base URL is injectable so tests
/// can point it at a local mock server.
#[derive(Clone)]
pub struct TwilioVerifyClient {
    http_client: Client,
    base_url: String,
    account_sid: String,
    auth_token: Secret<String>,
    verify_service_sid: String,
}

impl TwilioVerifyClient {
    pub fn new(
        base_url: String,
        account_sid: String,
        auth_token: Secret<String>,
        verify_service_sid: String,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            account_sid,
            auth_token,
            verify_service_sid,
        }
    }

    fn verifications_url(&self) -> String {
        format!(
            "{}/v2/Services/{}/Verifications",
            self.base_url, self.verify_service_sid
        )
    }

    fn verification_check_url(&self) -> String {
        format!(
            "{}/v2/Services/{}/VerificationCheck",
            self.base_url, self.verify_service_sid
        )
    }
}

#[derive(Debug, Deserialize)]
struct VerificationCheckResponse {
    status: String,
}

const APPROVED: &str = "approved";

#[async_trait::async_trait]
impl SmsVerifier for TwilioVerifyClient {
    #[tracing::instrument(name = "Requesting verification SMS", skip_all)]
    async fn start_verification(&self, phone: &PhoneNumber) -> Result<(), SmsVerifierError> {
        let response = self
            .http_client
            .post(self.verifications_url())
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&[("To", phone.as_str()), ("Channel", "sms")])
            .send()
            .await
            .map_err(|e| SmsVerifierError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "verification request rejected by provider");
            return Err(SmsVerifierError::Provider(format!(
                "provider returned status {status}"
            )));
        }

        Ok(())
    }

    #[tracing::instrument(name = "Checking verification code", skip_all)]
    async fn check_code(
        &self,
        phone: &PhoneNumber,
        code: &VerificationCode,
    ) -> Result<(), SmsVerifierError> {
        // Any failure to obtain an approval counts as a rejection: expired
        // codes surface as 404s from the provider, not as approval states.
        let response = self
            .http_client
            .post(self.verification_check_url())
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&[("To", phone.as_str()), ("Code", code.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "verification check did not reach provider");
                SmsVerifierError::CodeRejected
            })?;

        if !response.status().is_success() {
            return Err(SmsVerifierError::CodeRejected);
        }

        let check: VerificationCheckResponse = response
            .json()
            .await
            .map_err(|_| SmsVerifierError::CodeRejected)?;

        if check.status == APPROVED {
            Ok(())
        } else {
            Err(SmsVerifierError::CodeRejected)
        }
    }
}
