//! Axum-specific request-password-reset route.

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::Response};
use relock_adapters::handlers::{self, RequestPasswordResetData};
use relock_core::VerificationCodeStore;
use secrecy::Secret;
use serde::Deserialize;

use crate::{adapters::response_builder, error::ApiError, routes::invalid_body};

/// Axum request-password-reset route.
#[tracing::instrument(name = "Request password reset", skip_all)]
pub async fn request_password_reset<V>(
    State(verification_code_store): State<V>,
    payload: Result<Json<RequestPasswordResetRequest>, JsonRejection>,
) -> Result<Response, ApiError>
where
    V: VerificationCodeStore + Clone + 'static,
{
    let Json(request) = payload.map_err(invalid_body)?;

    let data = RequestPasswordResetData {
        email: request.email,
    };

    let response =
        handlers::handle_request_password_reset(verification_code_store, data, response_builder())
            .await?;

    Ok(response)
}

/// Axum-specific request body for requesting a reset
#[derive(Debug, Deserialize)]
pub struct RequestPasswordResetRequest {
    pub email: Secret<String>,
}
