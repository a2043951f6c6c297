pub mod mock_sms_verifier;
pub mod twilio_verify_client;
