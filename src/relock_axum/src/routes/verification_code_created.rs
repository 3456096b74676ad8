//! Webhook route feeding the verification-code-created trigger.
//!
//! Lets an external dispatcher deliver creation events. Callers prove themselves with the
//! shared secret in [`TRIGGER_SECRET_HEADER`]. Authenticated calls always answer
//! `204 No Content`: like the in-process trigger, failures only reach the logs.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
    response::Response,
};
use relock_adapters::handlers;
use relock_core::{
    AccountStore, Email, EmailClient, ResponseBuilder, ResponseHelpers, VerificationCode,
    VerificationCodeCreated, VerificationCodeStore,
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::adapters::response_builder;

pub const TRIGGER_SECRET_HEADER: &str = "x-trigger-secret";

/// State of the webhook route
#[derive(Clone)]
pub struct TriggerState<A, V, E> {
    pub account_store: A,
    pub verification_code_store: V,
    pub email_client: E,
    pub app_name: String,
    pub secret: Secret<String>,
}

#[tracing::instrument(name = "Verification code created", skip_all)]
pub async fn verification_code_created<A, V, E>(
    State(state): State<TriggerState<A, V, E>>,
    headers: HeaderMap,
    payload: Result<Json<VerificationCodeCreatedRequest>, JsonRejection>,
) -> Response
where
    A: AccountStore + Clone + 'static,
    V: VerificationCodeStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    if !is_authorized(&headers, &state.secret) {
        tracing::warn!("Rejecting trigger event without a valid secret");
        return response_builder().status(401).build();
    }

    match parse_event(payload) {
        Ok(event) => {
            handlers::handle_dispatched_verification_code_created(
                state.verification_code_store,
                state.account_store,
                state.email_client,
                &state.app_name,
                event,
            )
            .await
        }
        Err(reason) => tracing::warn!(reason = %reason, "Ignoring malformed trigger event"),
    }

    response_builder().no_content()
}

fn is_authorized(headers: &HeaderMap, secret: &Secret<String>) -> bool {
    headers
        .get(TRIGGER_SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == secret.expose_secret())
}

fn parse_event(
    payload: Result<Json<VerificationCodeCreatedRequest>, JsonRejection>,
) -> Result<VerificationCodeCreated, String> {
    let Json(request) = payload.map_err(|e| e.body_text())?;
    let email = Email::try_from(request.email).map_err(|e| e.to_string())?;
    let code = VerificationCode::parse(&request.code).map_err(|e| e.to_string())?;
    Ok(VerificationCodeCreated::new(email, code))
}

/// Body of a record-creation event: the record key and its code
#[derive(Debug, Deserialize)]
pub struct VerificationCodeCreatedRequest {
    pub email: Secret<String>,
    pub code: String,
}
