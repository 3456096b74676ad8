use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use relock_core::{
    Email, VerificationCode, VerificationCodeRecord, VerificationCodeStore,
    VerificationCodeStoreError,
};

#[derive(Default, Clone)]
pub struct HashMapVerificationCodeStore {
    records: Arc<RwLock<HashMap<Email, VerificationCodeRecord>>>,
}

impl HashMapVerificationCodeStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl VerificationCodeStore for HashMapVerificationCodeStore {
    async fn create(
        &self,
        email: Email,
        record: VerificationCodeRecord,
    ) -> Result<(), VerificationCodeStoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&email) {
            return Err(VerificationCodeStoreError::RecordAlreadyExists);
        }
        records.insert(email, record);
        Ok(())
    }

    async fn get(
        &self,
        email: &Email,
    ) -> Result<Option<VerificationCodeRecord>, VerificationCodeStoreError> {
        let records = self.records.read().await;
        Ok(records.get(email).cloned())
    }

    async fn mark_used(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> Result<(), VerificationCodeStoreError> {
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(email) else {
            return Err(VerificationCodeStoreError::RecordNotFound);
        };
        if !record.matches(code) {
            return Err(VerificationCodeStoreError::CodeMismatch);
        }
        record.mark_used();
        Ok(())
    }

    async fn delete(&self, email: &Email) -> Result<(), VerificationCodeStoreError> {
        let mut records = self.records.write().await;
        records
            .remove(email)
            .ok_or(VerificationCodeStoreError::RecordNotFound)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::parse("student@example.com").unwrap()
    }

    fn code(raw: &str) -> VerificationCode {
        VerificationCode::parse(raw).unwrap()
    }

    fn record() -> VerificationCodeRecord {
        VerificationCodeRecord::new(code("042137"))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = HashMapVerificationCodeStore::new();
        store.create(email(), record()).await.unwrap();

        assert_eq!(store.get(&email()).await.unwrap(), Some(record()));
    }

    #[tokio::test]
    async fn test_create_twice_fails() {
        let store = HashMapVerificationCodeStore::new();
        store.create(email(), record()).await.unwrap();

        assert_eq!(
            store.create(email(), record()).await,
            Err(VerificationCodeStoreError::RecordAlreadyExists)
        );
    }

    #[tokio::test]
    async fn test_mark_used() {
        let store = HashMapVerificationCodeStore::new();
        assert_eq!(
            store.mark_used(&email(), &code("042137")).await,
            Err(VerificationCodeStoreError::RecordNotFound)
        );

        store.create(email(), record()).await.unwrap();
        store.mark_used(&email(), &code("042137")).await.unwrap();

        assert!(store.get(&email()).await.unwrap().unwrap().is_used());
    }

    #[tokio::test]
    async fn test_mark_used_leaves_replaced_record_alone() {
        let store = HashMapVerificationCodeStore::new();
        store.create(email(), record()).await.unwrap();
        store.delete(&email()).await.unwrap();
        store
            .create(email(), VerificationCodeRecord::new(code("731902")))
            .await
            .unwrap();

        assert_eq!(
            store.mark_used(&email(), &code("042137")).await,
            Err(VerificationCodeStoreError::CodeMismatch)
        );
        assert!(!store.get(&email()).await.unwrap().unwrap().is_used());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = HashMapVerificationCodeStore::new();
        store.create(email(), record()).await.unwrap();
        store.delete(&email()).await.unwrap();

        assert_eq!(store.get(&email()).await.unwrap(), None);
        assert_eq!(
            store.delete(&email()).await,
            Err(VerificationCodeStoreError::RecordNotFound)
        );
    }
}
