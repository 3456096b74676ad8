use std::fmt;

use serde::Serialize;

/// Error kinds surfaced to callers of the callable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallableErrorKind {
    InvalidArgument,
    FailedPrecondition,
    Internal,
}

impl CallableErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid-argument",
            Self::FailedPrecondition => "failed-precondition",
            Self::Internal => "internal",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidArgument => 400,
            Self::FailedPrecondition => 412,
            Self::Internal => 500,
        }
    }
}

impl fmt::Display for CallableErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed failure returned from a callable operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CallableError {
    pub kind: CallableErrorKind,
    pub message: String,
}

impl CallableError {
    pub fn new(kind: CallableErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(CallableErrorKind::InvalidArgument, message)
    }

    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::new(CallableErrorKind::FailedPrecondition, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(CallableErrorKind::Internal, message)
    }

    /// JSON body sent back to the caller.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "status": self.kind,
                "message": self.message,
            }
        })
    }
}
