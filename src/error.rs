//! JSON error response body.

use axum::http::StatusCode;
use serde::Serialize;

/// Standard JSON error response format.
#[derive(Debug, Serialize, Clone)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create an error response from a status code.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status_to_error_code(status),
            message: message.into(),
        }
    }
}

/// Convert a status code to an error code string (e.g., "NOT_FOUND").
pub(crate) fn status_to_error_code(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("ERROR")
        .to_uppercase()
        .replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_to_error_code_common_codes() {
        assert_eq!(status_to_error_code(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_to_error_code(StatusCode::BAD_REQUEST), "BAD_REQUEST");
        assert_eq!(
            status_to_error_code(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL_SERVER_ERROR"
        );
        assert_eq!(
            status_to_error_code(StatusCode::REQUEST_TIMEOUT),
            "REQUEST_TIMEOUT"
        );
    }

    #[test]
    fn error_response_from_status() {
        let resp = ErrorResponse::from_status(StatusCode::NOT_FOUND, "Resource not found");
        assert_eq!(resp.code, "NOT_FOUND");
        assert_eq!(resp.message, "Resource not found");
    }
}
