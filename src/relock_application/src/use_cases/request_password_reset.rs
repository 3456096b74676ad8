use relock_core::{
    Email, VerificationCode, VerificationCodeRecord, VerificationCodeStore,
    VerificationCodeStoreError,
};

/// Error types for request password reset use case
#[derive(Debug, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Verification code store error: {0}")]
    VerificationCodeStoreError(#[from] VerificationCodeStoreError),
}

/// Request password reset use case - issues a new verification-code record
///
/// Creating the record is what fires the verification email trigger, so a previous
/// record for the same email is removed first.
pub struct RequestPasswordResetUseCase<V>
where
    V: VerificationCodeStore,
{
    verification_code_store: V,
}

impl<V> RequestPasswordResetUseCase<V>
where
    V: VerificationCodeStore,
{
    pub fn new(verification_code_store: V) -> Self {
        Self {
            verification_code_store,
        }
    }

    /// Execute the request password reset use case
    ///
    /// # Returns
    /// The issued code, or RequestPasswordResetError
    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
    ) -> Result<VerificationCode, RequestPasswordResetError> {
        match self.verification_code_store.delete(&email).await {
            Ok(()) | Err(VerificationCodeStoreError::RecordNotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let code = VerificationCode::generate();
        self.verification_code_store
            .create(email, VerificationCodeRecord::new(code.clone()))
            .await?;

        Ok(code)
    }
}
