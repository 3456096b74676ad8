use relock_core::{Account, AccountStore, AccountStoreError, Email};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: sqlx::PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }

    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    pub async fn add_account(&self, account: &Account) -> Result<(), AccountStoreError> {
        sqlx::query(
            r#"
                INSERT INTO accounts (email, first_name)
                VALUES ($1, $2)
                ON CONFLICT (email) DO UPDATE SET first_name = EXCLUDED.first_name
            "#,
        )
        .bind(account.email().as_ref().expose_secret())
        .bind(account.first_name())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let row: Option<(String, Option<String>)> = sqlx::query_as(
            r#"
                SELECT email, first_name
                FROM accounts
                WHERE email = $1
                LIMIT 1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let Some((stored_email, first_name)) = row else {
            return Ok(None);
        };

        let email = Email::try_from(Secret::from(stored_email))
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        Ok(Some(Account::new(email, first_name)))
    }
}
