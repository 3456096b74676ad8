use crate::domain::{email::Email, verification_code::VerificationCode};

/// Emitted once a verification-code record has been created for `email`.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationCodeCreated {
    pub email: Email,
    pub code: VerificationCode,
}

impl VerificationCodeCreated {
    pub fn new(email: Email, code: VerificationCode) -> Self {
        Self { email, code }
    }
}
