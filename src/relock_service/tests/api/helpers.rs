use std::sync::Arc;
use std::time::Duration;

use fake::{Fake, faker::internet::en::SafeEmail};
use relock_adapters::{
    config::{ResetSettings, test},
    email::{MockEmailClient, SentEmail},
    persistence::{HashMapAccountStore, HashMapAuthProvider, HashMapVerificationCodeStore},
    triggers::TriggeringVerificationCodeStore,
};
use relock_core::{
    Account, Email, Password, VerificationCode, VerificationCodeRecord, VerificationCodeStore,
};
use relock_axum::routes::TRIGGER_SECRET_HEADER;
use relock_service::{RelockService, TRIGGER_PATH, spawn_trigger_worker};
use secrecy::Secret;

pub const APP_NAME: &str = "Physica App";
pub const TRIGGER_SECRET: &str = "trigger-s3cret";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub account_store: HashMapAccountStore,
    pub auth_provider: HashMapAuthProvider,
    pub verification_code_store: TriggeringVerificationCodeStore<HashMapVerificationCodeStore>,
    pub email_client: MockEmailClient,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::spawn(false, None).await
    }

    pub async fn with_collapsed_errors() -> Self {
        Self::spawn(true, None).await
    }

    /// Records are only emailed through the trigger webhook, as with a configured secret.
    pub async fn with_trigger_webhook() -> Self {
        Self::spawn(false, Some(TRIGGER_SECRET)).await
    }

    async fn spawn(collapse_errors: bool, trigger_secret: Option<&str>) -> Self {
        let reset = ResetSettings {
            collapse_errors,
            app_name: APP_NAME.to_string(),
            trigger_secret: trigger_secret.map(|secret| Secret::new(secret.to_string())),
        };
        let account_store = HashMapAccountStore::new();
        let auth_provider = HashMapAuthProvider::new();
        let email_client = MockEmailClient::new();
        let (verification_code_store, events) =
            TriggeringVerificationCodeStore::new(HashMapVerificationCodeStore::new());

        let service_store: Arc<dyn VerificationCodeStore> = if trigger_secret.is_some() {
            Arc::new(verification_code_store.inner().clone())
        } else {
            spawn_trigger_worker(
                events,
                account_store.clone(),
                email_client.clone(),
                reset.app_name.clone(),
            );
            Arc::new(verification_code_store.clone())
        };

        let router = RelockService::new(
            account_store.clone(),
            service_store,
            auth_provider.clone(),
            email_client.clone(),
            &reset,
        )
        .as_nested_router(None);

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server failed");
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
            account_store,
            auth_provider,
            verification_code_store,
            email_client,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_trigger(
        &self,
        body: &serde_json::Value,
        secret: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}{}", self.address, TRIGGER_PATH))
            .json(body);
        if let Some(secret) = secret {
            request = request.header(TRIGGER_SECRET_HEADER, secret);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn post_reset_password(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_json("/reset-password", body).await
    }

    pub async fn post_request_password_reset(&self, email: &str) -> reqwest::Response {
        self.post_json(
            "/request-password-reset",
            &serde_json::json!({ "email": email }),
        )
        .await
    }

    pub async fn post_verify_reset_code(&self, email: &str, code: &str) -> reqwest::Response {
        self.post_json(
            "/verify-reset-code",
            &serde_json::json!({ "email": email, "verificationCode": code }),
        )
        .await
    }

    /// Registers both the profile and the auth identity for `email`.
    pub async fn add_user(&self, email: &str, first_name: Option<&str>, password: &str) {
        self.account_store
            .add_account(Account::new(
                parse_email(email),
                first_name.map(str::to_string),
            ))
            .await;
        self.auth_provider
            .add_identity(parse_email(email), parse_password(password))
            .await;
    }

    /// Writes a record directly, bypassing the trigger.
    pub async fn seed_record(&self, email: &str, code: &str, is_used: bool) {
        self.verification_code_store
            .inner()
            .create(
                parse_email(email),
                VerificationCodeRecord::from_parts(VerificationCode::parse(code).unwrap(), is_used),
            )
            .await
            .unwrap();
    }

    pub async fn record(&self, email: &str) -> Option<VerificationCodeRecord> {
        self.verification_code_store
            .get(&parse_email(email))
            .await
            .unwrap()
    }

    pub async fn password_is(&self, email: &str, password: &str) -> bool {
        self.auth_provider
            .password_matches(&parse_email(email), &parse_password(password))
            .await
    }

    /// Waits for the trigger worker to have sent `count` emails.
    pub async fn wait_for_emails(&self, count: usize) -> Vec<SentEmail> {
        for _ in 0..100 {
            let sent = self.email_client.sent_emails().await;
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("Expected {count} emails to be sent");
    }
}

pub fn random_email() -> String {
    SafeEmail().fake()
}

pub fn parse_email(email: &str) -> Email {
    Email::parse(email).unwrap()
}

pub fn parse_password(password: &str) -> Password {
    Password::try_from(Secret::from(password.to_string())).unwrap()
}

pub async fn error_body(response: reqwest::Response) -> (String, String) {
    let body: serde_json::Value = response.json().await.expect("Error body is JSON");
    (
        body["error"]["status"].as_str().unwrap_or_default().to_string(),
        body["error"]["message"].as_str().unwrap_or_default().to_string(),
    )
}
