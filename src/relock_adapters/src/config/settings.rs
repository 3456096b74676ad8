use std::time::Duration;

use config::{
    Config, ConfigError, Environment, File,
    builder::{ConfigBuilder, DefaultState},
};
use secrecy::Secret;
use serde::Deserialize;

use crate::config::constants::{SETTINGS_FILE, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct RelockSettings {
    pub server: ServerSettings,
    /// Accounts and auth identities live in memory when absent
    pub postgres: Option<PostgresSettings>,
    /// Verification codes live in memory when absent
    pub redis: Option<RedisSettings>,
    pub email_client: EmailClientSettings,
    pub reset: ResetSettings,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    Smtp,
    Postmark,
    /// Keep emails in memory, for local runs
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub provider: EmailProvider,
    pub sender: String,
    pub sender_name: String,
    pub base_url: String,
    pub smtp_relay: String,
    pub timeout_in_millis: u64,
    pub smtp_user: Option<Secret<String>>,
    pub smtp_password: Option<Secret<String>>,
    pub auth_token: Option<Secret<String>>,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetSettings {
    /// Report every reset failure as `internal`, hiding precondition details
    pub collapse_errors: bool,
    /// Name used in the email sign-off
    pub app_name: String,
    /// Shared secret of the trigger webhook. When set, creation events arrive over the
    /// webhook instead of from the in-process trigger.
    #[serde(default)]
    pub trigger_secret: Option<Secret<String>>,
}

/// Origins allowed to call the service from a browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl RelockSettings {
    /// Loads `.env`, the optional settings file, `RELOCK_*` variables and the well-known
    /// credential variables, in increasing order of precedence.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = Self::defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins"),
            )
            .set_override_option("postgres.url", read_env(env::DATABASE_URL_ENV_VAR))?
            .set_override_option("redis.host_name", read_env(env::REDIS_HOST_NAME_ENV_VAR))?
            .set_override_option("email_client.smtp_user", read_env(env::EMAIL_USER_ENV_VAR))?
            .set_override_option(
                "email_client.smtp_password",
                read_env(env::EMAIL_PASSWORD_ENV_VAR),
            )?
            .set_override_option(
                "email_client.auth_token",
                read_env(env::POSTMARK_AUTH_TOKEN_ENV_VAR),
            )?
            .set_override_option("reset.trigger_secret", read_env(env::TRIGGER_SECRET_ENV_VAR))?;

        Self::from_builder(builder)
    }

    /// Builder pre-filled with production defaults.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.address", prod::APP_ADDRESS)?
            .set_default("email_client.provider", "smtp")?
            .set_default("email_client.sender", prod::email_client::SENDER)?
            .set_default("email_client.sender_name", prod::email_client::SENDER_NAME)?
            .set_default("email_client.base_url", prod::email_client::BASE_URL)?
            .set_default("email_client.smtp_relay", prod::email_client::SMTP_RELAY)?
            .set_default(
                "email_client.timeout_in_millis",
                prod::email_client::TIMEOUT_IN_MILLIS as i64,
            )?
            .set_default("reset.collapse_errors", false)?
            .set_default("reset.app_name", prod::APP_NAME)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
