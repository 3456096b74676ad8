//! Axum integration for the Relock password-reset library.
//!
//! This crate provides the Axum adapters for the framework-agnostic handlers defined in
//! `relock_adapters`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  relock_core: ResponseBuilder trait      │
//! │  relock_adapters: handlers               │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  relock_axum: Axum implementations       │
//! │  - AxumResponseBuilder                   │
//! │  - ApiError (CallableError response)     │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use relock_axum::routes;
//!
//! let app = Router::new()
//!     .route("/verify-reset-code", post(routes::verify_reset_code::<RedisVerificationCodeStore>))
//!     .with_state(verification_code_store);
//! ```

pub mod adapters;
pub mod error;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumResponseBuilder, response_builder};
pub use error::ApiError;
