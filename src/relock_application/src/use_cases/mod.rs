pub mod request_password_reset;
pub mod reset_password;
pub mod send_verification_email;
pub mod verify_reset_code;

// Re-export for convenience
pub use request_password_reset::{RequestPasswordResetError, RequestPasswordResetUseCase};
pub use reset_password::{ResetPasswordError, ResetPasswordUseCase};
pub use send_verification_email::{
    SendOutcome, SendVerificationEmailError, SendVerificationEmailUseCase,
};
pub use verify_reset_code::{VerifyResetCodeError, VerifyResetCodeUseCase};
