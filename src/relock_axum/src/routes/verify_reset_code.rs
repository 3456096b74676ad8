//! Axum-specific verify-reset-code route.

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::Response};
use relock_adapters::handlers::{self, VerifyResetCodeData};
use relock_core::VerificationCodeStore;
use secrecy::Secret;
use serde::Deserialize;

use crate::{adapters::response_builder, error::ApiError, routes::invalid_body};

/// Axum verify-reset-code route.
#[tracing::instrument(name = "Verify reset code", skip_all)]
pub async fn verify_reset_code<V>(
    State(verification_code_store): State<V>,
    payload: Result<Json<VerifyResetCodeRequest>, JsonRejection>,
) -> Result<Response, ApiError>
where
    V: VerificationCodeStore + Clone + 'static,
{
    let Json(request) = payload.map_err(invalid_body)?;

    let data = VerifyResetCodeData {
        email: request.email,
        verification_code: request.verification_code,
    };

    let response =
        handlers::handle_verify_reset_code(verification_code_store, data, response_builder())
            .await?;

    Ok(response)
}

/// Axum-specific request body for verifying a reset code
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResetCodeRequest {
    pub email: Secret<String>,
    pub verification_code: String,
}
