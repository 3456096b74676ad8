use std::fmt;

use rand::Rng;
use thiserror::Error;

pub const MAX_CODE_LENGTH: usize = 32;
const GENERATED_CODE_DIGITS: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerificationCodeError {
    #[error("Verification code is empty")]
    Empty,
    #[error("Verification code must be at most {MAX_CODE_LENGTH} characters")]
    TooLong,
    #[error("Verification code must only contain letters and digits")]
    InvalidCharacters,
}

/// One-time code emailed to the account holder during a password reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Generates a fresh six digit code.
    pub fn generate() -> Self {
        let value: u32 = rand::rng().random_range(0..1_000_000);
        Self(format!("{value:0width$}", width = GENERATED_CODE_DIGITS))
    }

    pub fn parse(raw: impl AsRef<str>) -> Result<Self, VerificationCodeError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(VerificationCodeError::Empty);
        }
        if trimmed.len() > MAX_CODE_LENGTH {
            return Err(VerificationCodeError::TooLong);
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(VerificationCodeError::InvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VerificationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
