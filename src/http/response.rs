//! Error response rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An error response with a fixed status code and message.
#[derive(Debug)]
pub struct ErrorResponse {
    status: StatusCode,
    message: String,
}

impl ErrorResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

pub fn bad_request(message: impl std::fmt::Display) -> ErrorResponse {
    ErrorResponse {
        status: StatusCode::BAD_REQUEST,
        message: message.to_string(),
    }
}

pub fn unauthorized() -> ErrorResponse {
    ErrorResponse {
        status: StatusCode::UNAUTHORIZED,
        message: "401 Unauthorized".to_string(),
    }
}

pub fn forbidden() -> ErrorResponse {
    ErrorResponse {
        status: StatusCode::FORBIDDEN,
        message: "403 Forbidden".to_string(),
    }
}

pub fn not_found(message: impl std::fmt::Display) -> ErrorResponse {
    ErrorResponse {
        status: StatusCode::NOT_FOUND,
        message: message.to_string(),
    }
}

pub fn conflict(message: impl std::fmt::Display) -> ErrorResponse {
    ErrorResponse {
        status: StatusCode::CONFLICT,
        message: message.to_string(),
    }
}

/// Log the underlying error and substitute a generic message in the body.
pub fn internal_error(err: impl std::fmt::Display) -> ErrorResponse {
    tracing::error!(error = %err, "internal server error");
    ErrorResponse {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "500 Internal server error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(unauthorized().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(forbidden().status(), StatusCode::FORBIDDEN);
        assert_eq!(not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(
            internal_error("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let rendered = internal_error("connection refused to 10.0.0.5");
        assert_eq!(rendered.message, "500 Internal server error");
    }

    #[test]
    fn test_body_shape() {
        let body = ErrorBody {
            error: "404 page not found".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"404 page not found"}"#);
    }
}
