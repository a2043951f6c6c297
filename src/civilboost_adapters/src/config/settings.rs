use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use crate::persistence::postgres_user_store::HashingParams;
use crate::session::{DEFAULT_TOKEN_TTL_SECONDS, SessionTokenConfig};

/// Service configuration, loaded from an optional `config` file with
/// `CIVILBOOST__*` environment variables layered on top
/// (e.g. `CIVILBOOST__POSTGRES__URL`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub postgres: PostgresSettings,
    pub auth: AuthSettings,
    pub twilio: TwilioSettings,
    #[serde(default)]
    pub password_hash: PasswordHashSettings,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("CIVILBOOST").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            allowed_origins: AllowedOrigins::default(),
        }
    }
}

/// CORS allow-list. Empty means CORS headers are not emitted at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, origin: &[u8]) -> bool {
        self.0.iter().any(|allowed| allowed.as_bytes() == origin)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    #[serde(default = "default_token_ttl_seconds")]
    pub token_ttl_seconds: i64,
}

impl AuthSettings {
    pub fn session_token_config(&self) -> SessionTokenConfig {
        SessionTokenConfig::new(self.jwt_secret.clone(), self.token_ttl_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TwilioSettings {
    #[serde(default = "default_twilio_base_url")]
    pub base_url: String,
    pub account_sid: String,
    pub auth_token: Secret<String>,
    pub verify_service_sid: String,
    #[serde(default = "default_twilio_timeout_in_millis")]
    pub timeout_in_millis: u64,
}

impl TwilioSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordHashSettings {
    #[serde(default = "default_hash_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_hash_iterations")]
    pub iterations: u32,
    #[serde(default = "default_hash_parallelism")]
    pub parallelism: u32,
}

impl Default for PasswordHashSettings {
    fn default() -> Self {
        Self {
            memory_kib: default_hash_memory_kib(),
            iterations: default_hash_iterations(),
            parallelism: default_hash_parallelism(),
        }
    }
}

impl From<PasswordHashSettings> for HashingParams {
    fn from(settings: PasswordHashSettings) -> Self {
        HashingParams {
            memory_kib: settings.memory_kib,
            iterations: settings.iterations,
            parallelism: settings.parallelism,
        }
    }
}

fn default_address() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_token_ttl_seconds() -> i64 {
    DEFAULT_TOKEN_TTL_SECONDS
}

fn default_twilio_base_url() -> String {
    "https://verify.twilio.com".to_string()
}

fn default_twilio_timeout_in_millis() -> u64 {
    10_000
}

fn default_hash_memory_kib() -> u32 {
    HashingParams::default().memory_kib
}

fn default_hash_iterations() -> u32 {
    HashingParams::default().iterations
}

fn default_hash_parallelism() -> u32 {
    HashingParams::default().parallelism
}
