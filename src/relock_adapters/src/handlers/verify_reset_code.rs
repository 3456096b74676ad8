//! Framework-agnostic verify-reset-code handler.

use relock_application::VerifyResetCodeUseCase;
use relock_core::{
    CallableError, CallableErrorKind, Email, ResponseBuilder, ResponseHelpers, VerificationCode,
    VerificationCodeStore,
};
use secrecy::Secret;

/// Raw verify-reset-code input.
pub struct VerifyResetCodeData {
    pub email: Secret<String>,
    pub verification_code: String,
}

/// Framework-agnostic verify-reset-code handler.
///
/// Marks the verification record for `email` as used when the supplied code matches it,
/// which is what allows a later password reset.
#[tracing::instrument(name = "Handle verify reset code", skip_all)]
pub async fn handle_verify_reset_code<V, B>(
    verification_code_store: V,
    data: VerifyResetCodeData,
    builder: B,
) -> Result<B::Response, CallableError>
where
    V: VerificationCodeStore,
    B: ResponseBuilder,
{
    let email =
        Email::try_from(data.email).map_err(|e| CallableError::invalid_argument(e.to_string()))?;
    let code = VerificationCode::parse(&data.verification_code)
        .map_err(|e| CallableError::invalid_argument(e.to_string()))?;

    let use_case = VerifyResetCodeUseCase::new(verification_code_store);
    use_case.execute(email, code).await.map_err(|e| match e.kind() {
        CallableErrorKind::Internal => {
            tracing::error!(error = %e, "Error verifying reset code");
            CallableError::internal("Failed to verify reset code")
        }
        kind => CallableError::new(kind, e.to_string()),
    })?;

    Ok(builder.success())
}
