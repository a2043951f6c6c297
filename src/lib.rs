//! # CivilBoost - Credential & Identity Recovery Service Library
//!
//! Facade crate that re-exports the public APIs of the service components.
//! Use this crate to get access to the whole stack in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `PhoneNumber`, `UserRecord`, etc.
//! - **Ports**: `UserStore`, `SmsVerifier`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, the three recovery steps, etc.
//! - **Adapters**: `PostgresUserStore`, `HashMapUserStore`, `TwilioVerifyClient`, etc.
//! - **Service**: `ApiService` - the assembled HTTP API

/// Core domain types and value objects
pub mod core {
    pub use civilboost_core::*;
}

// Re-export the most commonly used core types at the root level
pub use civilboost_core::{
    DomainError, Email, NewUser, Password, PhoneNumber, UserRecord, VerificationCode,
};

/// Port trait definitions
pub mod ports {
    pub use civilboost_core::{SmsVerifier, SmsVerifierError, UserStore, UserStoreError};
}

pub use civilboost_core::{SmsVerifier, SmsVerifierError, UserStore, UserStoreError};

/// Application use cases
pub mod use_cases {
    pub use civilboost_application::*;
}

pub use civilboost_application::{
    ForgotPasswordUseCase, GetProfileUseCase, LoginUseCase, RegisterUseCase, ResetPasswordUseCase,
    SendVerificationUseCase, VerifyResetCodeUseCase,
};

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use civilboost_adapters::persistence::*;
    }

    /// SMS verification clients
    pub mod sms {
        pub use civilboost_adapters::sms::*;
    }

    /// Session token utilities
    pub mod session {
        pub use civilboost_adapters::session::*;
    }

    /// Configuration
    pub mod config {
        pub use civilboost_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use civilboost_adapters::{
    HashMapUserStore, MockSmsVerifier, PostgresUserStore, Settings, TwilioVerifyClient,
};

/// The assembled HTTP API service
pub use civilboost_service::ApiService;

// Re-export common external dependencies

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
