//! HTTP response abstraction for the callable operations.
//!
//! Handlers in `relock_adapters` build their responses through this trait so they stay
//! independent of the web framework. Framework crates implement it on a newtype of their
//! own response builder.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  relock_core: ResponseBuilder trait      │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  relock_axum: AxumResponseBuilder        │
//! └──────────────────────────────────────────┘
//! ```

use crate::domain::callable_error::CallableError;

/// Builder for the framework's HTTP response type.
///
/// ```ignore
/// builder
///     .status(200)
///     .json_body(json!({ "success": true }))
///     .build()
/// ```
pub trait ResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Shortcuts for the responses the callable operations produce.
pub trait ResponseHelpers: ResponseBuilder {
    /// 200 OK with `{"success": true}`
    fn success(self) -> Self::Response {
        self.status(200)
            .json_body(serde_json::json!({ "success": true }))
            .build()
    }

    /// 204 No Content, used by trigger endpoints
    fn no_content(self) -> Self::Response {
        self.status(204).build()
    }

    /// Error response whose status follows the error kind
    fn callable_error(self, error: &CallableError) -> Self::Response {
        self.status(error.kind.http_status())
            .json_body(error.to_json())
            .build()
    }
}

// Blanket implementation for all ResponseBuilder types
impl<T: ResponseBuilder> ResponseHelpers for T {}
