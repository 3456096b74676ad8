use relock_core::{
    CallableErrorKind, Email, VerificationCode, VerificationCodeStore, VerificationCodeStoreError,
};

/// Error types for verify reset code use case
#[derive(Debug, thiserror::Error)]
pub enum VerifyResetCodeError {
    #[error("No verification found for this email.")]
    NoVerification,
    #[error("Invalid verification code.")]
    InvalidCode,
    #[error("Verification code store error: {0}")]
    VerificationCodeStoreError(#[from] VerificationCodeStoreError),
}

impl VerifyResetCodeError {
    pub fn kind(&self) -> CallableErrorKind {
        match self {
            Self::NoVerification | Self::InvalidCode => CallableErrorKind::FailedPrecondition,
            Self::VerificationCodeStoreError(_) => CallableErrorKind::Internal,
        }
    }
}

/// Verify reset code use case - marks the record used once the caller proves they got the code
pub struct VerifyResetCodeUseCase<V>
where
    V: VerificationCodeStore,
{
    verification_code_store: V,
}

impl<V> VerifyResetCodeUseCase<V>
where
    V: VerificationCodeStore,
{
    pub fn new(verification_code_store: V) -> Self {
        Self {
            verification_code_store,
        }
    }

    /// Execute the verify reset code use case
    ///
    /// # Arguments
    /// * `email` - Email the reset was requested for
    /// * `code` - The code received by email
    #[tracing::instrument(name = "VerifyResetCodeUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        code: VerificationCode,
    ) -> Result<(), VerifyResetCodeError> {
        // The store compares the code and marks the record in one step
        match self.verification_code_store.mark_used(&email, &code).await {
            Ok(()) => Ok(()),
            Err(VerificationCodeStoreError::RecordNotFound) => {
                Err(VerifyResetCodeError::NoVerification)
            }
            Err(VerificationCodeStoreError::CodeMismatch) => Err(VerifyResetCodeError::InvalidCode),
            Err(e) => Err(e.into()),
        }
    }
}
