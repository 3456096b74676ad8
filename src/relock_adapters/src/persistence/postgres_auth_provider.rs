use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use relock_core::{AuthIdentity, AuthProvider, AuthProviderError, Email, Password, Uid};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};

/// Auth provider backed by the `auth_identities` table, storing argon2id hashes.
#[derive(Clone)]
pub struct PostgresAuthProvider {
    pool: sqlx::PgPool,
}

impl PostgresAuthProvider {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAuthProvider { pool }
    }

    #[tracing::instrument(name = "Adding auth identity to PostgreSQL", skip_all)]
    pub async fn add_identity(
        &self,
        email: &Email,
        password: Password,
    ) -> Result<Uid, AuthProviderError> {
        let uid = Uid::new();
        let password_hash = compute_password_hash(password)
            .await
            .map_err(AuthProviderError::UnexpectedError)?;

        sqlx::query(
            r#"
                INSERT INTO auth_identities (uid, email, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(uid.as_str())
        .bind(email.as_ref().expose_secret())
        .bind(password_hash.expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| AuthProviderError::UnexpectedError(e.to_string()))?;

        Ok(uid)
    }
}

#[async_trait::async_trait]
impl AuthProvider for PostgresAuthProvider {
    #[tracing::instrument(name = "Retrieving auth identity from PostgreSQL", skip_all)]
    async fn get_user_by_email(&self, email: &Email) -> Result<AuthIdentity, AuthProviderError> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
                SELECT uid, email
                FROM auth_identities
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthProviderError::UnexpectedError(e.to_string()))?;

        let Some((uid, stored_email)) = row else {
            return Err(AuthProviderError::UserNotFound);
        };

        let uid = Uid::parse(uid).map_err(|e| AuthProviderError::UnexpectedError(e.to_string()))?;
        let email = Email::try_from(Secret::from(stored_email))
            .map_err(|e| AuthProviderError::UnexpectedError(e.to_string()))?;
        Ok(AuthIdentity::new(uid, email))
    }

    #[tracing::instrument(name = "Set new password", skip_all)]
    async fn update_password(
        &self,
        uid: &Uid,
        new_password: Password,
    ) -> Result<(), AuthProviderError> {
        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(AuthProviderError::UnexpectedError)?;

        let result = sqlx::query(
            r#"
                UPDATE auth_identities
                SET password_hash = $1
                WHERE uid = $2
            "#,
        )
        .bind(password_hash.expose_secret())
        .bind(uid.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AuthProviderError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AuthProviderError::UserNotFound);
        }

        Ok(())
    }
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            let hasher = Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
            );
            hasher
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}
