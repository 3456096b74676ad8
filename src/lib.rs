//! # Relock - Password Reset Service Library
//!
//! This is a facade crate that re-exports the public APIs of the password-reset components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `VerificationCode`, `VerificationCodeRecord`, etc.
//! - **Ports**: `AccountStore`, `VerificationCodeStore`, `AuthProvider`, `EmailClient`
//! - **Use cases**: `ResetPasswordUseCase`, `SendVerificationEmailUseCase`, etc.
//! - **Adapters**: `PostgresAuthProvider`, `RedisVerificationCodeStore`, `SmtpEmailClient`, etc.
//! - **Service**: `RelockService` and the trigger worker

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use relock_core::*;
}

pub use relock_core::{
    Account, AuthIdentity, CallableError, CallableErrorKind, Email, EmailContent, Password, Uid,
    VerificationCode, VerificationCodeCreated, VerificationCodeRecord,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and service traits
pub mod ports {
    pub use relock_core::{
        AccountStore, AccountStoreError, AuthProvider, AuthProviderError, EmailClient,
        VerificationCodeStore, VerificationCodeStoreError,
    };
}

pub use ports::{AccountStore, AuthProvider, EmailClient, VerificationCodeStore};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use relock_application::*;
}

pub use relock_application::{
    RequestPasswordResetUseCase, ResetPasswordUseCase, SendVerificationEmailUseCase,
    VerifyResetCodeUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic handlers
    pub mod handlers {
        pub use relock_adapters::handlers::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use relock_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use relock_adapters::email::*;
    }

    /// Trigger delivery
    pub mod triggers {
        pub use relock_adapters::triggers::*;
    }

    /// Configuration
    pub mod config {
        pub use relock_adapters::config::*;
    }

    /// Axum routes
    pub mod axum {
        pub use relock_axum::*;
    }
}

pub use relock_adapters::{
    config::RelockSettings,
    email::{MockEmailClient, PostmarkEmailClient, SmtpEmailClient},
    persistence::{
        HashMapAccountStore, HashMapAuthProvider, HashMapVerificationCodeStore,
        PostgresAccountStore, PostgresAuthProvider, RedisVerificationCodeStore,
    },
    triggers::TriggeringVerificationCodeStore,
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use relock_service::{
    RelockService, build_email_client, get_postgres_pool, get_redis_client, run_migrations,
    spawn_trigger_worker,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
