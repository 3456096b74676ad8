use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{email::Email, email_content::EmailContent};

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &EmailContent,
    ) -> Result<(), String>;
}

#[async_trait]
impl<T: EmailClient + ?Sized> EmailClient for Arc<T> {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &EmailContent,
    ) -> Result<(), String> {
        (**self).send_email(recipient, subject, content).await
    }
}
