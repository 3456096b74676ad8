//! Handler for the verification-code-created trigger.
//!
//! Triggers have no caller to report to, so this is where delivery failures end: they are
//! logged and dropped.

use relock_application::{SendOutcome, SendVerificationEmailUseCase};
use relock_core::{AccountStore, EmailClient, VerificationCodeCreated, VerificationCodeStore};

/// Emails the code from `event` to the account registered under the same address.
///
/// Never fails. A missing account is logged at `warn`, any other failure at `error`.
#[tracing::instrument(name = "Handle verification code created", skip_all)]
pub async fn handle_verification_code_created<A, E>(
    account_store: A,
    email_client: E,
    app_name: &str,
    event: VerificationCodeCreated,
) where
    A: AccountStore,
    E: EmailClient,
{
    let use_case =
        SendVerificationEmailUseCase::new(account_store, email_client).with_app_name(app_name);

    match use_case.execute(event.email, event.code).await {
        Ok(SendOutcome::Sent) => tracing::info!("Verification email sent"),
        Ok(SendOutcome::NoAccount) => tracing::warn!("No user found with email"),
        Err(e) => tracing::error!(error = %e, "Error sending verification email"),
    }
}

/// Same as [`handle_verification_code_created`] for events delivered from outside the
/// process. The event is dropped unless the record stored under its address carries its code.
#[tracing::instrument(name = "Handle dispatched verification code created", skip_all)]
pub async fn handle_dispatched_verification_code_created<V, A, E>(
    verification_code_store: V,
    account_store: A,
    email_client: E,
    app_name: &str,
    event: VerificationCodeCreated,
) where
    V: VerificationCodeStore,
    A: AccountStore,
    E: EmailClient,
{
    match verification_code_store.get(&event.email).await {
        Ok(Some(record)) if record.matches(&event.code) => {
            handle_verification_code_created(account_store, email_client, app_name, event).await
        }
        Ok(_) => tracing::warn!("Ignoring event without a matching verification record"),
        Err(e) => tracing::error!(error = %e, "Error loading verification record"),
    }
}
