use crate::domain::verification_code::VerificationCode;

/// Per-email record tracking a password-reset code and whether it has been validated.
///
/// Expiry is only announced in the email copy; records never expire here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCodeRecord {
    code: VerificationCode,
    is_used: bool,
}

impl VerificationCodeRecord {
    /// A freshly issued, not yet validated record.
    pub fn new(code: VerificationCode) -> Self {
        Self {
            code,
            is_used: false,
        }
    }

    pub fn from_parts(code: VerificationCode, is_used: bool) -> Self {
        Self { code, is_used }
    }

    pub fn code(&self) -> &VerificationCode {
        &self.code
    }

    pub fn is_used(&self) -> bool {
        self.is_used
    }

    pub fn matches(&self, candidate: &VerificationCode) -> bool {
        &self.code == candidate
    }

    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}
