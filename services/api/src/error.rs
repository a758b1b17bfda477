//! Custom error types for the clinic API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for the clinic API.
///
/// Every variant maps to an HTTP status and every response body shares the
/// `{ok:false, error:<string>}` envelope the mobile client expects.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Missing, invalid, or expired session token
    #[error("{0}")]
    Unauthenticated(String),

    /// Unknown entity id
    #[error("{0}")]
    NotFound(String),

    /// Duplicate username
    #[error("{0}")]
    Conflict(String),

    /// Unexpected store or infrastructure failure. The cause is logged at
    /// the mapping site; the caller only ever sees a generic message.
    #[error("server error")]
    InternalServerError,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "ok": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("invalid status".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated("missing session token".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("appointment not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("username taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::InternalServerError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let response = ApiError::Conflict("username taken".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_hides_cause() {
        assert_eq!(ApiError::InternalServerError.to_string(), "server error");
    }
}
