use relock_core::{AccountStore, AccountStoreError, Email, EmailClient, VerificationCode};

use crate::emails::{DEFAULT_APP_NAME, PASSWORD_RESET_SUBJECT, PasswordResetEmail};

/// What happened to a verification email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The email was handed to the transport
    Sent,
    /// No account matches the email, nothing was sent
    NoAccount,
}

/// Error types for send verification email use case
#[derive(Debug, thiserror::Error)]
pub enum SendVerificationEmailError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Failed to render email: {0}")]
    TemplateError(#[from] askama::Error),
    #[error("Failed to send email: {0}")]
    EmailError(String),
}

/// Send verification email use case - emails a freshly created reset code to its owner
pub struct SendVerificationEmailUseCase<A, E>
where
    A: AccountStore,
    E: EmailClient,
{
    account_store: A,
    email_client: E,
    app_name: String,
}

impl<A, E> SendVerificationEmailUseCase<A, E>
where
    A: AccountStore,
    E: EmailClient,
{
    pub fn new(account_store: A, email_client: E) -> Self {
        Self {
            account_store,
            email_client,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// Name used in the email sign-off
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Execute the send verification email use case
    ///
    /// # Arguments
    /// * `email` - Key of the created verification-code record
    /// * `code` - The code stored in that record
    ///
    /// # Returns
    /// The outcome of the delivery, or SendVerificationEmailError
    #[tracing::instrument(name = "SendVerificationEmailUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        code: VerificationCode,
    ) -> Result<SendOutcome, SendVerificationEmailError> {
        let Some(account) = self.account_store.find_by_email(&email).await? else {
            return Ok(SendOutcome::NoAccount);
        };

        let content = PasswordResetEmail {
            app_name: &self.app_name,
            first_name: account.greeting_name(),
            code: code.as_str(),
        }
        .render()?;

        self.email_client
            .send_email(&email, PASSWORD_RESET_SUBJECT, &content)
            .await
            .map_err(SendVerificationEmailError::EmailError)?;

        Ok(SendOutcome::Sent)
    }
}
