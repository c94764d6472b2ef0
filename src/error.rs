use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Request-level errors, mapped onto HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or empty (400)
    #[error("{0}")]
    Validation(String),
    /// The key does not resolve to an entry (404)
    #[error("{0}")]
    NotFound(String),
    /// The workbook could not be written back to disk (500)
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn persistence(message: impl Into<String>, source: StoreError) -> Self {
        ApiError::Persistence {
            message: message.into(),
            source,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            // Persistence failures carry the underlying error in the body
            ApiError::Persistence { message, source } => {
                json!({ "message": message, "error": source.to_string() })
            }
            other => json!({ "message": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::validation("missing").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found("gone").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_response_body() {
        let resp = ApiError::validation("Please provide both name and priority.")
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
