//! Appointment workflow routes

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{Appointment, AppointmentStatus},
    repositories::ListFilter,
    state::AppState,
};

/// Query parameters for appointment listing. The status parameters accept
/// comma-separated lists; `status` wins over `excludeStatus` when both are
/// supplied. `userId` stays a string here so an empty parameter can count
/// as absent instead of failing extraction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAppointmentsQuery {
    pub user_id: Option<String>,
    pub status: Option<String>,
    pub exclude_status: Option<String>,
}

/// Response for appointment listing
#[derive(Serialize)]
pub struct AppointmentsResponse {
    pub ok: bool,
    pub appointments: Vec<Appointment>,
}

/// Request for an appointment status change
#[derive(Deserialize)]
pub struct UpdateAppointmentStatusRequest {
    pub status: Option<String>,
}

/// Response for a single appointment
#[derive(Serialize)]
pub struct AppointmentResponse {
    pub ok: bool,
    pub appointment: Appointment,
}

/// List appointments, newest first
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<ListAppointmentsQuery>,
) -> ApiResult<impl IntoResponse> {
    let user_id = super::parse_user_id(query.user_id.as_deref())?;
    let filter = ListFilter::from_params(
        user_id,
        query.status.as_deref(),
        query.exclude_status.as_deref(),
    );

    let appointments = state
        .appointment_repository
        .list(&filter)
        .await
        .map_err(|e| {
            error!("Failed to list appointments: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(AppointmentsResponse {
        ok: true,
        appointments,
    }))
}

/// Update the status of an appointment
pub async fn update_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentStatusRequest>,
) -> ApiResult<impl IntoResponse> {
    let status = payload
        .status
        .as_deref()
        .and_then(AppointmentStatus::parse)
        .ok_or_else(|| ApiError::Validation("invalid status".to_string()))?;

    let appointment = state
        .appointment_repository
        .update_status(id, status)
        .await
        .map_err(|e| {
            error!("Failed to update appointment status: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("appointment not found".to_string()))?;

    Ok(Json(AppointmentResponse {
        ok: true,
        appointment,
    }))
}
