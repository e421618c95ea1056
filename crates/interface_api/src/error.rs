//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_policy::PolicyError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Not-found and validation failures carry no body.
            ApiError::NotFound(msg) => {
                warn!(reason = %msg, "Resource not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::Validation(msg) => {
                warn!(reason = %msg, "Rejected invalid request");
                StatusCode::BAD_REQUEST.into_response()
            }
            ApiError::Conflict(msg) => {
                let body = ErrorResponse {
                    error: "conflict".to_string(),
                    message: msg,
                };
                (StatusCode::CONFLICT, Json(body)).into_response()
            }
            ApiError::Internal(msg) => {
                // Storage detail stays in the log.
                error!(reason = %msg, "Request failed");
                let body = ErrorResponse {
                    error: "internal_error".to_string(),
                    message: "An internal error occurred".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PolicyError::Validation(msg) => ApiError::Validation(msg),
            PolicyError::DuplicatePolicyNumber(msg) => ApiError::Conflict(msg),
            PolicyError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use core_kernel::PolicyId;

    #[tokio::test]
    async fn test_internal_error_hides_storage_detail() {
        let response = ApiError::from(PolicyError::Storage(
            "relation \"insurances\" does not exist".to_string(),
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "internal_error");
        assert_eq!(json["message"], "An internal error occurred");
        assert!(!String::from_utf8_lossy(&body).contains("insurances"));
    }

    #[test]
    fn test_domain_errors_map_to_statuses() {
        let cases = [
            (PolicyError::NotFound(PolicyId::new(1)), StatusCode::NOT_FOUND),
            (PolicyError::validation("Provider is required"), StatusCode::BAD_REQUEST),
            (PolicyError::DuplicatePolicyNumber("P-1".to_string()), StatusCode::CONFLICT),
            (PolicyError::Storage("down".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
