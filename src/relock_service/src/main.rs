use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use relock_adapters::{
    config::{PostgresSettings, RedisSettings, RelockSettings},
    persistence::{
        HashMapAccountStore, HashMapAuthProvider, HashMapVerificationCodeStore,
        PostgresAccountStore, PostgresAuthProvider, RedisVerificationCodeStore,
    },
    triggers::TriggeringVerificationCodeStore,
};
use relock_core::{AccountStore, AuthProvider, VerificationCodeStore};
use relock_service::{
    RelockService, build_email_client, check_account_storage, get_postgres_pool,
    get_redis_client, run_migrations, spawn_trigger_worker, tracing::init_tracing,
};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = RelockSettings::load().wrap_err("Failed to load settings")?;
    check_account_storage(&settings).wrap_err("Accounts need a database")?;

    let (account_store, auth_provider) = account_stores(settings.postgres.as_ref()).await?;
    let verification_code_store = verification_code_store(settings.redis.as_ref())?;
    let email_client =
        build_email_client(&settings.email_client).wrap_err("Failed to build email client")?;

    // Records are emailed by exactly one trigger: the webhook or the in-process worker
    let verification_code_store: Arc<dyn VerificationCodeStore> =
        if settings.reset.trigger_secret.is_some() {
            tracing::info!("Verification emails are sent on webhook events");
            verification_code_store
        } else {
            let (store, events) = TriggeringVerificationCodeStore::new(verification_code_store);
            spawn_trigger_worker(
                events,
                account_store.clone(),
                email_client.clone(),
                settings.reset.app_name.clone(),
            );
            Arc::new(store)
        };

    let service = RelockService::new(
        account_store,
        verification_code_store,
        auth_provider,
        email_client,
        &settings.reset,
    );

    let allowed_origins = (!settings.allowed_origins.is_empty()).then_some(settings.allowed_origins);
    let listener = tokio::net::TcpListener::bind(&settings.server.address)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", settings.server.address))?;

    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}

async fn account_stores(
    postgres: Option<&PostgresSettings>,
) -> Result<(Arc<dyn AccountStore>, Arc<dyn AuthProvider>)> {
    let Some(postgres) = postgres else {
        tracing::warn!("No database configured, accounts and credentials live in memory");
        return Ok((
            Arc::new(HashMapAccountStore::new()),
            Arc::new(HashMapAuthProvider::new()),
        ));
    };

    let pool = get_postgres_pool(postgres.url.expose_secret())
        .await
        .wrap_err("Failed to create Postgres connection pool")?;
    run_migrations(&pool)
        .await
        .wrap_err("Failed to run migrations")?;

    Ok((
        Arc::new(PostgresAccountStore::new(pool.clone())),
        Arc::new(PostgresAuthProvider::new(pool)),
    ))
}

fn verification_code_store(
    redis: Option<&RedisSettings>,
) -> Result<Arc<dyn VerificationCodeStore>> {
    let Some(redis) = redis else {
        tracing::warn!("No Redis configured, verification codes live in memory");
        return Ok(Arc::new(HashMapVerificationCodeStore::new()));
    };

    let conn = get_redis_client(&redis.host_name)?
        .get_connection()
        .wrap_err("Failed to get Redis connection")?;

    Ok(Arc::new(RedisVerificationCodeStore::new(Arc::new(
        RwLock::new(conn),
    ))))
}
