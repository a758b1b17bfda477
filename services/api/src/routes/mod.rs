//! Clinic API routes

use axum::{
    Json, Router,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::{error::ApiError, middleware::session_auth, state::AppState};

pub mod appointments;
pub mod auth;
pub mod records;

/// Create the router for the clinic API.
///
/// The workflow routes and the current-user lookup sit behind the session
/// authenticator. Registration, login, and the health check are public, and
/// so is logout: it consumes the token itself, which keeps a repeated logout
/// from failing once the session row is gone.
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/auth/me", get(auth::me))
        .route("/appointments", get(appointments::list_appointments))
        .route(
            "/appointments/:id/status",
            patch(appointments::update_appointment_status),
        )
        .route("/records", get(records::list_records))
        .route("/records/:id/status", patch(records::update_record_status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_auth,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "clinic-api"
    }))
}

/// Parse an optional `userId` query parameter. An empty parameter counts as
/// absent, matching the handling of the status filters; a malformed id is a
/// validation failure so the error envelope is preserved.
pub(crate) fn parse_user_id(value: Option<&str>) -> Result<Option<Uuid>, ApiError> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(|_| ApiError::Validation("invalid userId".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_absent_and_empty() {
        assert_eq!(parse_user_id(None).unwrap(), None);
        assert_eq!(parse_user_id(Some("")).unwrap(), None);
    }

    #[test]
    fn test_parse_user_id_valid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_user_id(Some(&id.to_string())).unwrap(), Some(id));
    }

    #[test]
    fn test_parse_user_id_malformed_is_validation_error() {
        let err = parse_user_id(Some("not-a-uuid")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
