//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers, and convert results to Axum responses.

pub mod request_password_reset;
pub mod reset_password;
pub mod verification_code_created;
pub mod verify_reset_code;

pub use request_password_reset::request_password_reset;
pub use reset_password::reset_password;
pub use verification_code_created::{
    TRIGGER_SECRET_HEADER, TriggerState, verification_code_created,
};
pub use verify_reset_code::verify_reset_code;

use axum::extract::rejection::JsonRejection;
use relock_core::CallableError;

/// Malformed or incomplete bodies are an invalid argument, like malformed fields.
pub(crate) fn invalid_body(rejection: JsonRejection) -> CallableError {
    CallableError::invalid_argument(rejection.body_text())
}
