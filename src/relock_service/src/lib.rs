//! Runnable password-reset service: the axum router, the trigger worker and the
//! process-level wiring shared by the `relock` binary and the API tests.

pub mod helpers;
pub mod relock_service;
pub mod tracing;
pub mod trigger_worker;

pub use helpers::{
    SetupError, build_email_client, check_account_storage, get_postgres_pool, get_redis_client, run_migrations,
};
pub use relock_service::{RelockService, TRIGGER_PATH};
pub use trigger_worker::spawn_trigger_worker;
