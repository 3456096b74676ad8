pub mod emails;
pub mod use_cases;

// Re-export for convenience
pub use emails::{CODE_EXPIRY_MINUTES, PASSWORD_RESET_SUBJECT, PasswordResetEmail};
pub use use_cases::{
    RequestPasswordResetError, RequestPasswordResetUseCase, ResetPasswordError,
    ResetPasswordUseCase, SendOutcome, SendVerificationEmailError, SendVerificationEmailUseCase,
    VerifyResetCodeError, VerifyResetCodeUseCase,
};
