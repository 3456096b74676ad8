pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
    pub const EMAIL_USER_ENV_VAR: &str = "EMAIL_USER";
    pub const EMAIL_PASSWORD_ENV_VAR: &str = "EMAIL_PASSWORD";
    pub const POSTMARK_AUTH_TOKEN_ENV_VAR: &str = "POSTMARK_AUTH_TOKEN";
    pub const TRIGGER_SECRET_ENV_VAR: &str = "RELOCK_TRIGGER_SECRET";
    /// Prefix for every other setting, e.g. `RELOCK_RESET__COLLAPSE_ERRORS`
    pub const SETTINGS_ENV_PREFIX: &str = "RELOCK";
}

/// Optional settings file, any format supported by `config` (`relock.json`, ...)
pub const SETTINGS_FILE: &str = "relock";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const APP_NAME: &str = "Physica App";
    pub mod email_client {
        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const SMTP_RELAY: &str = "smtp.gmail.com";
        pub const SENDER: &str = "noreply@physicaapp.com";
        pub const SENDER_NAME: &str = "Physica App";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
