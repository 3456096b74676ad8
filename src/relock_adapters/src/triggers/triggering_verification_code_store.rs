//! Store decorator that turns record creation into trigger events.

use relock_core::{
    Email, VerificationCode, VerificationCodeCreated, VerificationCodeRecord, VerificationCodeStore,
    VerificationCodeStoreError,
};
use tokio::sync::mpsc;

pub const TRIGGER_CHANNEL_CAPACITY: usize = 256;

/// Wraps a [`VerificationCodeStore`] and publishes a [`VerificationCodeCreated`] event after
/// every successful `create`. Publishing never fails the write.
#[derive(Clone)]
pub struct TriggeringVerificationCodeStore<S> {
    inner: S,
    events: mpsc::Sender<VerificationCodeCreated>,
}

impl<S> TriggeringVerificationCodeStore<S>
where
    S: VerificationCodeStore,
{
    /// Returns the decorated store together with the receiving end of its event channel.
    pub fn new(inner: S) -> (Self, mpsc::Receiver<VerificationCodeCreated>) {
        let (events, receiver) = mpsc::channel(TRIGGER_CHANNEL_CAPACITY);
        (Self { inner, events }, receiver)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<S> VerificationCodeStore for TriggeringVerificationCodeStore<S>
where
    S: VerificationCodeStore,
{
    async fn create(
        &self,
        email: Email,
        record: VerificationCodeRecord,
    ) -> Result<(), VerificationCodeStoreError> {
        let event = VerificationCodeCreated::new(email.clone(), record.code().clone());
        self.inner.create(email, record).await?;

        if self.events.send(event).await.is_err() {
            tracing::warn!("Trigger worker is gone, verification email will not be sent");
        }
        Ok(())
    }

    async fn get(
        &self,
        email: &Email,
    ) -> Result<Option<VerificationCodeRecord>, VerificationCodeStoreError> {
        self.inner.get(email).await
    }

    async fn mark_used(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> Result<(), VerificationCodeStoreError> {
        self.inner.mark_used(email, code).await
    }

    async fn delete(&self, email: &Email) -> Result<(), VerificationCodeStoreError> {
        self.inner.delete(email).await
    }
}
