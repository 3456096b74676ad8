use crate::domain::{email::Email, uid::Uid};

/// Profile document of an account holder, linked to its auth identity by email.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    email: Email,
    first_name: Option<String>,
}

impl Account {
    pub fn new(email: Email, first_name: Option<String>) -> Self {
        Self { email, first_name }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// First name for greetings, empty when the profile has none.
    pub fn greeting_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or_default()
    }
}

/// Credential-bearing identity managed by the auth provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthIdentity {
    uid: Uid,
    email: Email,
}

impl AuthIdentity {
    pub fn new(uid: Uid, email: Email) -> Self {
        Self { uid, email }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}
