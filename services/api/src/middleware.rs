//! Session authentication middleware

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::{error::ApiError, models::{Doctor, Session}, state::AppState};

/// Header carrying the opaque session token
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// The authenticated practitioner and the session that proved it, made
/// available to handlers through request extensions.
#[derive(Debug, Clone)]
pub struct CurrentDoctor {
    pub doctor: Doctor,
    pub session: Session,
}

/// Extract the session token from the request headers, if present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|header| header.to_str().ok())
}

/// Resolve the `x-session-token` header to a doctor.
///
/// Fails with 401 when the header is missing, when no live (non-expired)
/// session matches the token, or when the session's doctor no longer exists.
/// On success the resolved identity is attached to the request; the check
/// itself has no side effects.
pub async fn session_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = token_from_headers(req.headers())
        .ok_or_else(|| ApiError::Unauthenticated("missing session token".to_string()))?;

    let session = state
        .session_repository
        .find_by_token(token)
        .await
        .map_err(|e| {
            error!("Failed to look up session: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::Unauthenticated("invalid session".to_string()))?;

    let doctor = state
        .doctor_repository
        .find_by_id(session.doctor_id)
        .await
        .map_err(|e| {
            error!("Failed to look up doctor for session: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::Unauthenticated("user not found".to_string()))?;

    req.extensions_mut().insert(CurrentDoctor { doctor, session });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_token_from_headers() {
        let mut headers = HeaderMap::new();
        assert!(token_from_headers(&headers).is_none());

        headers.insert(SESSION_TOKEN_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(token_from_headers(&headers), Some("abc-123"));
    }
}
