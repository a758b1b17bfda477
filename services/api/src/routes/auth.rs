//! Authentication routes

use axum::{
    Extension, Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    middleware::{CurrentDoctor, token_from_headers},
    models::{DoctorPublic, NewDoctor, doctor::normalize_username},
    state::AppState,
    validation::{validate_password, validate_username},
};

/// Request for practitioner registration
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub mobile: Option<String>,
}

/// Response for practitioner registration
#[derive(Serialize)]
pub struct RegisterResponse {
    pub ok: bool,
    pub user: DoctorPublic,
}

/// Request for practitioner login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response for practitioner login
#[derive(Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub token: String,
    pub user: DoctorPublic,
}

/// Response for the current-user lookup
#[derive(Serialize)]
pub struct MeResponse {
    pub ok: bool,
    pub user: DoctorPublic,
}

fn require_credentials(
    username: Option<&str>,
    password: Option<&str>,
) -> Result<(String, String), ApiError> {
    let username = username.map(normalize_username).unwrap_or_default();
    let password = password.unwrap_or_default().to_string();

    if username.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "username and password required".to_string(),
        ));
    }

    Ok((username, password))
}

/// Practitioner registration endpoint
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let (username, password) =
        require_credentials(payload.username.as_deref(), payload.password.as_deref())?;

    validate_username(&username).map_err(ApiError::Validation)?;
    validate_password(&password).map_err(ApiError::Validation)?;

    info!("Registration attempt for username: {}", username);

    let existing = state
        .doctor_repository
        .find_by_username(&username)
        .await
        .map_err(|e| {
            error!("Failed to check for existing username: {}", e);
            ApiError::InternalServerError
        })?;

    if existing.is_some() {
        return Err(ApiError::Conflict("username taken".to_string()));
    }

    let new_doctor = NewDoctor {
        username,
        password,
        full_name: payload.full_name,
        mobile: payload.mobile,
        email: None,
    };

    let doctor = state
        .doctor_repository
        .create(&new_doctor)
        .await
        .map_err(|e| {
            error!("Failed to create doctor account: {}", e);
            ApiError::InternalServerError
        })?;

    let response = RegisterResponse {
        ok: true,
        user: doctor.public(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Practitioner login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let (username, password) =
        require_credentials(payload.username.as_deref(), payload.password.as_deref())?;

    info!("Login attempt for username: {}", username);

    let doctor = state
        .doctor_repository
        .find_by_username(&username)
        .await
        .map_err(|e| {
            error!("Failed to look up doctor: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::Unauthenticated("User not found".to_string()))?;

    let password_matches = state
        .doctor_repository
        .verify_password(&doctor, &password)
        .map_err(|e| {
            error!("Failed to verify password: {}", e);
            ApiError::InternalServerError
        })?;

    if !password_matches {
        return Err(ApiError::Unauthenticated("Incorrect password".to_string()));
    }

    let session = state
        .session_repository
        .create(doctor.id, state.session_config.ttl_hours)
        .await
        .map_err(|e| {
            error!("Failed to create session: {}", e);
            ApiError::InternalServerError
        })?;

    let response = LoginResponse {
        ok: true,
        token: session.token,
        user: doctor.public(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Logout endpoint. Consumes the session token directly rather than going
/// through the session authenticator: the delete is idempotent, so a repeat
/// logout with the same token still answers `{ok:true}` instead of 401.
/// Only the header itself is required.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let token = token_from_headers(&headers)
        .ok_or_else(|| ApiError::Validation("missing session token".to_string()))?;

    info!("Logout request");

    state
        .session_repository
        .delete_by_token(token)
        .await
        .map_err(|e| {
            error!("Failed to delete session: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

/// Current-user endpoint
pub async fn me(
    Extension(current): Extension<CurrentDoctor>,
) -> ApiResult<impl IntoResponse> {
    let response = MeResponse {
        ok: true,
        user: current.doctor.public(),
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_credentials_normalizes_username() {
        let (username, password) =
            require_credentials(Some("  Dr_Amit "), Some("secret123")).unwrap();
        assert_eq!(username, "dr_amit");
        assert_eq!(password, "secret123");
    }

    #[test]
    fn test_require_credentials_rejects_missing_fields() {
        assert!(require_credentials(None, Some("secret123")).is_err());
        assert!(require_credentials(Some("dr_amit"), None).is_err());
        assert!(require_credentials(Some("   "), Some("secret123")).is_err());
        assert!(require_credentials(Some("dr_amit"), Some("")).is_err());
    }
}
