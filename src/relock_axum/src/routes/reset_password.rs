//! Axum-specific reset-password route.

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::Response};
use relock_adapters::handlers::{self, ErrorExposure, ResetPasswordData};
use relock_core::{AuthProvider, VerificationCodeStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::{adapters::response_builder, error::ApiError, routes::invalid_body};

/// Axum reset-password route.
///
/// The actual reset logic is in the framework-agnostic handler.
#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<V, P>(
    State((verification_code_store, auth_provider, exposure)): State<(V, P, ErrorExposure)>,
    payload: Result<Json<ResetPasswordRequest>, JsonRejection>,
) -> Result<Response, ApiError>
where
    V: VerificationCodeStore + Clone + 'static,
    P: AuthProvider + Clone + 'static,
{
    let Json(request) = payload.map_err(|e| exposure.apply(invalid_body(e)))?;

    let data = ResetPasswordData {
        email: request.email,
        new_password: request.new_password,
        verification_code: request.verification_code,
    };

    let response = handlers::handle_reset_password(
        verification_code_store,
        auth_provider,
        data,
        exposure,
        response_builder(),
    )
    .await?;

    Ok(response)
}

/// Axum-specific request body for reset password
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: Secret<String>,
    pub new_password: Secret<String>,
    pub verification_code: String,
}
