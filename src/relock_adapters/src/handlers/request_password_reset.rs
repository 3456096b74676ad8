//! Framework-agnostic request-password-reset handler.

use relock_application::RequestPasswordResetUseCase;
use relock_core::{
    CallableError, Email, ResponseBuilder, ResponseHelpers, VerificationCodeStore,
};
use secrecy::Secret;

/// Raw request-password-reset input.
pub struct RequestPasswordResetData {
    pub email: Secret<String>,
}

/// Framework-agnostic request-password-reset handler.
///
/// Issues a fresh verification code for `email`. Answers with success whether or not an
/// account exists; the email trigger drops unknown addresses on its own.
#[tracing::instrument(name = "Handle request password reset", skip_all)]
pub async fn handle_request_password_reset<V, B>(
    verification_code_store: V,
    data: RequestPasswordResetData,
    builder: B,
) -> Result<B::Response, CallableError>
where
    V: VerificationCodeStore,
    B: ResponseBuilder,
{
    let email =
        Email::try_from(data.email).map_err(|e| CallableError::invalid_argument(e.to_string()))?;

    let use_case = RequestPasswordResetUseCase::new(verification_code_store);
    use_case.execute(email).await.map_err(|e| {
        tracing::error!(error = %e, "Error issuing verification code");
        CallableError::internal("Failed to request password reset")
    })?;

    Ok(builder.success())
}
