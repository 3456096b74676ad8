//! Framework-agnostic password-reset handlers.
//!
//! These handlers hold the request-level logic without any framework dependencies: they
//! parse raw input into domain types, run the use case, and decide what the caller sees.
//! Framework-specific routes extract the raw input, call these handlers, and return the
//! built response or convert the [`CallableError`](relock_core::CallableError).

pub mod request_password_reset;
pub mod reset_password;
pub mod verification_code_created;
pub mod verify_reset_code;

pub use request_password_reset::{RequestPasswordResetData, handle_request_password_reset};
pub use reset_password::{
    ErrorExposure, RESET_FAILED_MESSAGE, ResetPasswordData, handle_reset_password,
};
pub use verification_code_created::{
    handle_dispatched_verification_code_created, handle_verification_code_created,
};
pub use verify_reset_code::{VerifyResetCodeData, handle_verify_reset_code};
