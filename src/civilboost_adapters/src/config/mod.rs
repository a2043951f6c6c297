pub mod settings;

pub use settings::{AllowedOrigins, AuthSettings, PasswordHashSettings, PostgresSettings,
    ServerSettings, Settings, TwilioSettings};
