//! Framework-agnostic reset-password handler.

use relock_application::{ResetPasswordError, ResetPasswordUseCase};
use relock_core::{
    AuthProvider, CallableError, CallableErrorKind, Email, Password, ResponseBuilder,
    ResponseHelpers, VerificationCode, VerificationCodeStore,
};
use secrecy::Secret;

/// Message reported for every failure that is not a precondition.
pub const RESET_FAILED_MESSAGE: &str = "Failed to reset password";

/// How much of a reset failure the caller gets to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorExposure {
    /// Invalid input and failed preconditions keep their own kind and message
    #[default]
    Distinct,
    /// Every failure is reported as `internal`
    Collapsed,
}

impl ErrorExposure {
    pub fn from_collapse_flag(collapse_errors: bool) -> Self {
        if collapse_errors {
            Self::Collapsed
        } else {
            Self::Distinct
        }
    }

    /// Rewrites `error` for the caller according to this exposure.
    pub fn apply(self, error: CallableError) -> CallableError {
        match self {
            Self::Distinct => error,
            Self::Collapsed => CallableError::internal(RESET_FAILED_MESSAGE),
        }
    }
}

/// Raw reset-password input, before any parsing.
pub struct ResetPasswordData {
    pub email: Secret<String>,
    pub new_password: Secret<String>,
    pub verification_code: String,
}

/// Framework-agnostic reset-password handler.
///
/// Replaces the credential of the identity behind `email` once its verification record
/// has been validated and the supplied code matches it.
///
/// # Type Parameters
/// * `V` - Verification-code store holding the reset records
/// * `P` - Auth provider owning the credentials
/// * `B` - Response builder for the framework being used
///
/// # Returns
/// `200 {"success": true}`, or a [`CallableError`] for the route to render
#[tracing::instrument(name = "Handle reset password", skip_all)]
pub async fn handle_reset_password<V, P, B>(
    verification_code_store: V,
    auth_provider: P,
    data: ResetPasswordData,
    exposure: ErrorExposure,
    builder: B,
) -> Result<B::Response, CallableError>
where
    V: VerificationCodeStore,
    P: AuthProvider,
    B: ResponseBuilder,
{
    let (email, new_password, code) = parse(data).map_err(|e| exposure.apply(e))?;

    let use_case = ResetPasswordUseCase::new(verification_code_store, auth_provider);
    use_case
        .execute(email, new_password, code)
        .await
        .map_err(|e| exposure.apply(to_callable_error(e)))?;

    Ok(builder.success())
}

fn parse(data: ResetPasswordData) -> Result<(Email, Password, VerificationCode), CallableError> {
    let email =
        Email::try_from(data.email).map_err(|e| CallableError::invalid_argument(e.to_string()))?;
    let new_password = Password::try_from(data.new_password)
        .map_err(|e| CallableError::invalid_argument(e.to_string()))?;
    let code = VerificationCode::parse(&data.verification_code)
        .map_err(|e| CallableError::invalid_argument(e.to_string()))?;
    Ok((email, new_password, code))
}

fn to_callable_error(error: ResetPasswordError) -> CallableError {
    match error.kind() {
        CallableErrorKind::Internal => {
            tracing::error!(error = %error, "Error resetting password");
            CallableError::internal(RESET_FAILED_MESSAGE)
        }
        kind => {
            tracing::info!(error = %error, "Password reset refused");
            CallableError::new(kind, error.to_string())
        }
    }
}
