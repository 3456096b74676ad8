use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use relock_core::{AuthIdentity, AuthProvider, AuthProviderError, Email, Password, Uid};

#[derive(Clone)]
struct StoredIdentity {
    uid: Uid,
    password: Password,
}

/// In-memory auth provider keeping plaintext credentials, for tests and local runs.
#[derive(Default, Clone)]
pub struct HashMapAuthProvider {
    identities: Arc<RwLock<HashMap<Email, StoredIdentity>>>,
}

impl HashMapAuthProvider {
    pub fn new() -> Self {
        Self {
            identities: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers an identity and returns its uid.
    pub async fn add_identity(&self, email: Email, password: Password) -> Uid {
        let uid = Uid::new();
        let mut identities = self.identities.write().await;
        identities.insert(
            email,
            StoredIdentity {
                uid: uid.clone(),
                password,
            },
        );
        uid
    }

    pub async fn password_matches(&self, email: &Email, candidate: &Password) -> bool {
        let identities = self.identities.read().await;
        identities
            .get(email)
            .is_some_and(|identity| &identity.password == candidate)
    }
}

#[async_trait::async_trait]
impl AuthProvider for HashMapAuthProvider {
    async fn get_user_by_email(&self, email: &Email) -> Result<AuthIdentity, AuthProviderError> {
        let identities = self.identities.read().await;
        let identity = identities
            .get(email)
            .ok_or(AuthProviderError::UserNotFound)?;
        Ok(AuthIdentity::new(identity.uid.clone(), email.clone()))
    }

    async fn update_password(
        &self,
        uid: &Uid,
        new_password: Password,
    ) -> Result<(), AuthProviderError> {
        let mut identities = self.identities.write().await;
        let identity = identities
            .values_mut()
            .find(|identity| &identity.uid == uid)
            .ok_or(AuthProviderError::UserNotFound)?;
        identity.password = new_password;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn password(raw: &str) -> Password {
        Password::try_from(Secret::from(raw.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_update_password_by_uid() {
        let provider = HashMapAuthProvider::new();
        let email = Email::parse("student@example.com").unwrap();
        let uid = provider
            .add_identity(email.clone(), password("old_password"))
            .await;

        let identity = provider.get_user_by_email(&email).await.unwrap();
        assert_eq!(identity.uid(), &uid);

        provider
            .update_password(&uid, password("new_password"))
            .await
            .unwrap();
        assert!(provider.password_matches(&email, &password("new_password")).await);
        assert!(!provider.password_matches(&email, &password("old_password")).await);
    }

    #[tokio::test]
    async fn test_unknown_identity() {
        let provider = HashMapAuthProvider::new();
        let email = Email::parse("student@example.com").unwrap();

        assert_eq!(
            provider.get_user_by_email(&email).await,
            Err(AuthProviderError::UserNotFound)
        );
        assert_eq!(
            provider.update_password(&Uid::new(), password("new_password")).await,
            Err(AuthProviderError::UserNotFound)
        );
    }
}
