use relock_adapters::handlers::handle_verification_code_created;
use relock_core::{AccountStore, EmailClient, VerificationCodeCreated};
use tokio::{sync::mpsc, task::JoinHandle};

/// Runs the verification email trigger for every event on `events`, one at a time.
///
/// The task ends once every sender has been dropped and the channel is drained.
pub fn spawn_trigger_worker<A, E>(
    mut events: mpsc::Receiver<VerificationCodeCreated>,
    account_store: A,
    email_client: E,
    app_name: String,
) -> JoinHandle<()>
where
    A: AccountStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            handle_verification_code_created(
                account_store.clone(),
                email_client.clone(),
                &app_name,
                event,
            )
            .await;
        }
        tracing::info!("Trigger worker stopped");
    })
}
