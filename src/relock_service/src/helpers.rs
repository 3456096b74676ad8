use std::sync::Arc;

use redis::{Client, RedisResult};
use relock_adapters::{
    config::{EmailClientSettings, EmailProvider, RelockSettings},
    email::{MockEmailClient, PostmarkEmailClient, SmtpEmailClient},
};
use relock_core::{Email, EmailClient};
use secrecy::Secret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Failures while wiring the service from its settings
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),
    #[error("Invalid sender address: {0}")]
    InvalidSender(String),
    #[error("Failed to build SMTP transport: {0}")]
    Smtp(#[from] relock_adapters::email::SmtpError),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// In-memory accounts start empty and nothing can add to them, so only local runs with the
/// mock provider may go without a database.
pub fn check_account_storage(settings: &RelockSettings) -> Result<(), SetupError> {
    match (&settings.postgres, settings.email_client.provider) {
        (None, provider) if provider != EmailProvider::Mock => {
            Err(SetupError::MissingSetting("DATABASE_URL"))
        }
        _ => Ok(()),
    }
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

/// Apply the migrations embedded from `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

/// Create a Redis client
///
/// # Arguments
/// * `redis_hostname` - Redis server hostname
pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}

/// Build the email client selected by `settings.provider`
pub fn build_email_client(
    settings: &EmailClientSettings,
) -> Result<Arc<dyn EmailClient>, SetupError> {
    let sender = Email::try_from(Secret::new(settings.sender.clone()))
        .map_err(|e| SetupError::InvalidSender(e.to_string()))?;

    match settings.provider {
        EmailProvider::Smtp => {
            let user = settings
                .smtp_user
                .as_ref()
                .ok_or(SetupError::MissingSetting("EMAIL_USER"))?;
            let password = settings
                .smtp_password
                .as_ref()
                .ok_or(SetupError::MissingSetting("EMAIL_PASSWORD"))?;
            let mailbox = SmtpEmailClient::sender_mailbox(&settings.sender_name, &sender)
                .map_err(|e| SetupError::InvalidSender(e.to_string()))?;

            let client = SmtpEmailClient::new(
                &settings.smtp_relay,
                user,
                password,
                mailbox,
                settings.timeout(),
            )?;
            Ok(Arc::new(client))
        }
        EmailProvider::Postmark => {
            let auth_token = settings
                .auth_token
                .clone()
                .ok_or(SetupError::MissingSetting("POSTMARK_AUTH_TOKEN"))?;
            let http_client = reqwest::Client::builder()
                .timeout(settings.timeout())
                .build()?;

            Ok(Arc::new(PostmarkEmailClient::new(
                settings.base_url.clone(),
                &settings.sender_name,
                sender,
                auth_token,
                http_client,
            )))
        }
        EmailProvider::Mock => {
            tracing::warn!("Emails are kept in memory and never delivered");
            Ok(Arc::new(MockEmailClient::new()))
        }
    }
}
