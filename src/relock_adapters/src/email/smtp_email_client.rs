use std::time::Duration;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use relock_core::{Email, EmailClient, EmailContent};
use secrecy::{ExposeSecret, Secret};

/// Email client delivering through an authenticated SMTP relay.
#[derive(Clone)]
pub struct SmtpEmailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpEmailClient {
    /// Connects lazily to `relay` over TLS using the given account.
    pub fn new(
        relay: &str,
        user: &Secret<String>,
        password: &Secret<String>,
        sender: Mailbox,
        timeout: Duration,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)?
            .credentials(Credentials::new(
                user.expose_secret().clone(),
                password.expose_secret().clone(),
            ))
            .timeout(Some(timeout))
            .build();

        Ok(Self { transport, sender })
    }

    pub fn sender_mailbox(
        sender_name: &str,
        sender: &Email,
    ) -> Result<Mailbox, lettre::address::AddressError> {
        let address = sender.as_ref().expose_secret().parse()?;
        Ok(Mailbox::new(Some(sender_name.to_owned()), address))
    }
}

fn build_message(
    sender: &Mailbox,
    recipient: &Email,
    subject: &str,
    content: &EmailContent,
) -> Result<Message, String> {
    let to = recipient
        .as_ref()
        .expose_secret()
        .parse::<Mailbox>()
        .map_err(|e| e.to_string())?;

    Message::builder()
        .from(sender.clone())
        .to(to)
        .subject(subject)
        .multipart(MultiPart::alternative_plain_html(
            content.text.clone(),
            content.html.clone(),
        ))
        .map_err(|e| e.to_string())
}

#[async_trait::async_trait]
impl EmailClient for SmtpEmailClient {
    #[tracing::instrument(name = "Sending email over SMTP", skip_all)]
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &EmailContent,
    ) -> Result<(), String> {
        let message = build_message(&self.sender, recipient, subject, content)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
