use std::sync::Arc;

use redis::{Commands, Connection};
use relock_core::{
    Email, VerificationCode, VerificationCodeRecord, VerificationCodeStore,
    VerificationCodeStoreError,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct RedisVerificationCodeStore {
    conn: Arc<RwLock<Connection>>,
}

impl RedisVerificationCodeStore {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl VerificationCodeStore for RedisVerificationCodeStore {
    #[tracing::instrument(name = "Creating verification record in Redis", skip_all)]
    async fn create(
        &self,
        email: Email,
        record: VerificationCodeRecord,
    ) -> Result<(), VerificationCodeStoreError> {
        let key = get_key(&email);
        let value = serde_json::to_string(&StoredRecord::from(&record))
            .map_err(|e| VerificationCodeStoreError::UnexpectedError(e.to_string()))?;

        let mut conn = self.conn.write().await;
        let created: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(value)
            .arg("NX")
            .query(&mut *conn)
            .map_err(|e| VerificationCodeStoreError::UnexpectedError(e.to_string()))?;

        match created {
            Some(_) => Ok(()),
            None => Err(VerificationCodeStoreError::RecordAlreadyExists),
        }
    }

    #[tracing::instrument(name = "Retrieving verification record from Redis", skip_all)]
    async fn get(
        &self,
        email: &Email,
    ) -> Result<Option<VerificationCodeRecord>, VerificationCodeStoreError> {
        let key = get_key(email);
        let mut conn = self.conn.write().await;
        let value: Option<String> = conn
            .get(&key)
            .map_err(|e| VerificationCodeStoreError::UnexpectedError(e.to_string()))?;

        value.map(|value| parse_record(&value)).transpose()
    }

    #[tracing::instrument(name = "Marking verification record used in Redis", skip_all)]
    async fn mark_used(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> Result<(), VerificationCodeStoreError> {
        let key = get_key(email);
        let mut conn = self.conn.write().await;
        let value: Option<String> = conn
            .get(&key)
            .map_err(|e| VerificationCodeStoreError::UnexpectedError(e.to_string()))?;
        let Some(value) = value else {
            return Err(VerificationCodeStoreError::RecordNotFound);
        };

        let mut record = parse_record(&value)?;
        if !record.matches(code) {
            return Err(VerificationCodeStoreError::CodeMismatch);
        }
        record.mark_used();
        let value = serde_json::to_string(&StoredRecord::from(&record))
            .map_err(|e| VerificationCodeStoreError::UnexpectedError(e.to_string()))?;

        // XX keeps a concurrently deleted record deleted
        let updated: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(value)
            .arg("XX")
            .query(&mut *conn)
            .map_err(|e| VerificationCodeStoreError::UnexpectedError(e.to_string()))?;

        match updated {
            Some(_) => Ok(()),
            None => Err(VerificationCodeStoreError::RecordNotFound),
        }
    }

    #[tracing::instrument(name = "Deleting verification record from Redis", skip_all)]
    async fn delete(&self, email: &Email) -> Result<(), VerificationCodeStoreError> {
        let key = get_key(email);
        let mut conn = self.conn.write().await;
        let removed: usize = conn
            .del(&key)
            .map_err(|e| VerificationCodeStoreError::UnexpectedError(e.to_string()))?;

        if removed == 0 {
            return Err(VerificationCodeStoreError::RecordNotFound);
        }
        Ok(())
    }
}

/// Stored shape of a record, shared with other writers of the key space.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    code: String,
    #[serde(default)]
    is_used: bool,
}

impl From<&VerificationCodeRecord> for StoredRecord {
    fn from(record: &VerificationCodeRecord) -> Self {
        Self {
            code: record.code().as_str().to_owned(),
            is_used: record.is_used(),
        }
    }
}

fn parse_record(value: &str) -> Result<VerificationCodeRecord, VerificationCodeStoreError> {
    let stored: StoredRecord = serde_json::from_str(value)
        .map_err(|e| VerificationCodeStoreError::UnexpectedError(e.to_string()))?;
    let code = VerificationCode::parse(&stored.code)
        .map_err(|e| VerificationCodeStoreError::UnexpectedError(e.to_string()))?;
    Ok(VerificationCodeRecord::from_parts(code, stored.is_used))
}

const VERIFICATION_CODE_KEY_PREFIX: &str = "verification_code:";

fn get_key(email: &Email) -> String {
    format!(
        "{}{}",
        VERIFICATION_CODE_KEY_PREFIX,
        email.as_ref().expose_secret()
    )
}
