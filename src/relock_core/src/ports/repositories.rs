use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AuthIdentity},
    email::Email,
    password::Password,
    uid::Uid,
    verification_code::VerificationCode,
    verification_record::VerificationCodeRecord,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Looks up at most one account whose email matches.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError>;
}

// VerificationCodeStore port trait and errors
#[derive(Debug, Error)]
pub enum VerificationCodeStoreError {
    #[error("Verification record already exists")]
    RecordAlreadyExists,
    #[error("Verification record not found")]
    RecordNotFound,
    #[error("Verification code does not match")]
    CodeMismatch,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for VerificationCodeStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::RecordAlreadyExists, Self::RecordAlreadyExists)
                | (Self::RecordNotFound, Self::RecordNotFound)
                | (Self::CodeMismatch, Self::CodeMismatch)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    /// Creates the record for `email`, failing if one already exists.
    async fn create(
        &self,
        email: Email,
        record: VerificationCodeRecord,
    ) -> Result<(), VerificationCodeStoreError>;

    async fn get(
        &self,
        email: &Email,
    ) -> Result<Option<VerificationCodeRecord>, VerificationCodeStoreError>;

    /// Marks the record for `email` used, but only while it still carries `code`.
    async fn mark_used(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> Result<(), VerificationCodeStoreError>;

    async fn delete(&self, email: &Email) -> Result<(), VerificationCodeStoreError>;
}

// AuthProvider port trait and errors
#[derive(Debug, Error)]
pub enum AuthProviderError {
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AuthProviderError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn get_user_by_email(&self, email: &Email) -> Result<AuthIdentity, AuthProviderError>;

    async fn update_password(
        &self,
        uid: &Uid,
        new_password: Password,
    ) -> Result<(), AuthProviderError>;
}

// Shared trait objects, so adapters can be picked at runtime

#[async_trait]
impl<T: AccountStore + ?Sized> AccountStore for Arc<T> {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        (**self).find_by_email(email).await
    }
}

#[async_trait]
impl<T: VerificationCodeStore + ?Sized> VerificationCodeStore for Arc<T> {
    async fn create(
        &self,
        email: Email,
        record: VerificationCodeRecord,
    ) -> Result<(), VerificationCodeStoreError> {
        (**self).create(email, record).await
    }

    async fn get(
        &self,
        email: &Email,
    ) -> Result<Option<VerificationCodeRecord>, VerificationCodeStoreError> {
        (**self).get(email).await
    }

    async fn mark_used(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> Result<(), VerificationCodeStoreError> {
        (**self).mark_used(email, code).await
    }

    async fn delete(&self, email: &Email) -> Result<(), VerificationCodeStoreError> {
        (**self).delete(email).await
    }
}

#[async_trait]
impl<T: AuthProvider + ?Sized> AuthProvider for Arc<T> {
    async fn get_user_by_email(&self, email: &Email) -> Result<AuthIdentity, AuthProviderError> {
        (**self).get_user_by_email(email).await
    }

    async fn update_password(
        &self,
        uid: &Uid,
        new_password: Password,
    ) -> Result<(), AuthProviderError> {
        (**self).update_password(uid, new_password).await
    }
}
