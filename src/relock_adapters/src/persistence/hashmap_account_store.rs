use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use relock_core::{Account, AccountStore, AccountStoreError, Email};

#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Inserts or replaces the account stored under its email.
    pub async fn add_account(&self, account: Account) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.email().clone(), account);
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }
}
