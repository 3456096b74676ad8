use axum::response::{IntoResponse, Response};
use relock_core::{CallableError, ResponseHelpers};

use crate::adapters::response_builder;

/// Axum rendering of a [`CallableError`].
///
/// The body is `{"error": {"status": "<kind>", "message": "..."}}` and the HTTP status
/// follows the kind.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub CallableError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        response_builder().callable_error(&self.0)
    }
}
