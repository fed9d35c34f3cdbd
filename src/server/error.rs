//! Error types and response handling for the RPC server.
//!
//! Maps failures to HTTP status codes and the JSON error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::rpc::{ErrorBody, ErrorEnvelope};
use crate::store::StoreError;

/// Errors returned by RPC handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The counter store failed to read or write.
    #[error("Persistence error: {0}")]
    Store(#[from] StoreError),

    /// Request body could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Store(_) => "persistence_error",
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }

    fn envelope(&self, request_id: String) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorBody {
                error_type: self.error_type().to_string(),
                message: self.to_string(),
                request_id,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(%request_id, error_type = self.error_type(), "responding with error");
        (self.status_code(), Json(self.envelope(request_id))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_is_internal() {
        let err = ApiError::Store(StoreError::MissingRecord);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "persistence_error");
    }

    #[test]
    fn invalid_request_is_bad_request() {
        let err = ApiError::InvalidRequest("missing field `action`".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), "invalid_request");
    }

    #[tokio::test]
    async fn error_response_format() {
        let response = ApiError::Store(StoreError::MissingRecord).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let envelope: ErrorEnvelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.error.error_type, "persistence_error");
        assert!(uuid::Uuid::parse_str(&envelope.error.request_id).is_ok());
    }
}
