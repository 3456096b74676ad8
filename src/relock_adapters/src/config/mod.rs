pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, EmailClientSettings, EmailProvider, PostgresSettings, RedisSettings,
    RelockSettings, ResetSettings, ServerSettings,
};
