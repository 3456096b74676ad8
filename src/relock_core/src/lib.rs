pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AuthIdentity},
    callable_error::{CallableError, CallableErrorKind},
    email::{Email, EmailError},
    email_content::EmailContent,
    events::VerificationCodeCreated,
    password::{Password, PasswordError},
    uid::{Uid, UidError},
    verification_code::{VerificationCode, VerificationCodeError},
    verification_record::VerificationCodeRecord,
};

pub use ports::{
    repositories::{
        AccountStore, AccountStoreError, AuthProvider, AuthProviderError, VerificationCodeStore,
        VerificationCodeStoreError,
    },
    services::EmailClient,
};

pub use http_abstraction::{ResponseBuilder, ResponseHelpers};
