use relock_core::{
    AuthProvider, AuthProviderError, CallableErrorKind, Email, Password, VerificationCode,
    VerificationCodeStore, VerificationCodeStoreError,
};

/// Error types for reset password use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("No verification found for this email.")]
    NoVerification,
    #[error("Verification code has not been validated.")]
    NotValidated,
    #[error("Verification code does not match.")]
    CodeMismatch,
    #[error("Verification code store error: {0}")]
    VerificationCodeStoreError(#[from] VerificationCodeStoreError),
    #[error("Auth provider error: {0}")]
    AuthProviderError(#[from] AuthProviderError),
}

impl ResetPasswordError {
    pub fn kind(&self) -> CallableErrorKind {
        match self {
            Self::NoVerification | Self::NotValidated | Self::CodeMismatch => {
                CallableErrorKind::FailedPrecondition
            }
            Self::VerificationCodeStoreError(_) | Self::AuthProviderError(_) => {
                CallableErrorKind::Internal
            }
        }
    }
}

/// Reset password use case - replaces the credential once the reset code has been validated
pub struct ResetPasswordUseCase<V, P>
where
    V: VerificationCodeStore,
    P: AuthProvider,
{
    verification_code_store: V,
    auth_provider: P,
}

impl<V, P> ResetPasswordUseCase<V, P>
where
    V: VerificationCodeStore,
    P: AuthProvider,
{
    pub fn new(verification_code_store: V, auth_provider: P) -> Self {
        Self {
            verification_code_store,
            auth_provider,
        }
    }

    /// Execute the reset password use case
    ///
    /// # Arguments
    /// * `email` - Email the reset was requested for
    /// * `new_password` - The new password to set
    /// * `code` - The code the caller received by email
    ///
    /// # Returns
    /// Ok(()) on success, or ResetPasswordError
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        new_password: Password,
        code: VerificationCode,
    ) -> Result<(), ResetPasswordError> {
        let record = self
            .verification_code_store
            .get(&email)
            .await?
            .ok_or(ResetPasswordError::NoVerification)?;

        if !record.is_used() {
            return Err(ResetPasswordError::NotValidated);
        }

        if !record.matches(&code) {
            return Err(ResetPasswordError::CodeMismatch);
        }

        let identity = self.auth_provider.get_user_by_email(&email).await?;

        self.auth_provider
            .update_password(identity.uid(), new_password)
            .await?;

        Ok(())
    }
}
