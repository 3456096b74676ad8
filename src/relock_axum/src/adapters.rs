//! Axum implementation of the framework-agnostic response builder.
//!
//! `ResponseBuilder` lives in `relock_core`, so it is implemented here on a wrapper around
//! Axum's own builder to satisfy the orphan rule.

use axum::body::Body;
use axum::http::{Response, StatusCode};
use relock_core::ResponseBuilder;

/// Wrapper around Axum's response builder.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    /// Create a new Axum response builder
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        match self.builder.body(Body::from(body)) {
            Ok(response) => response,
            // Only reachable through an invalid status code or header
            Err(e) => {
                tracing::error!(error = %e, "Failed to build response");
                let mut response = Response::new(Body::empty());
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
        }
    }
}

/// Helper function to create an Axum response builder
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relock_core::ResponseHelpers;

    #[test]
    fn test_response_builder() {
        let resp = response_builder()
            .status(200)
            .header("x-custom", "value")
            .json_body(serde_json::json!({"success": true}))
            .build();

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("x-custom").and_then(|v| v.to_str().ok()),
            Some("value")
        );
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_invalid_header_falls_back_to_internal_error() {
        let resp = response_builder()
            .status(200)
            .header("bad header", "value")
            .build();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_no_content_has_empty_body() {
        let resp = response_builder().no_content();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.headers().get("content-type").is_none());
    }
}
