//! Record workflow routes

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
    models::{Record, RecordStatus, RecordUpdate},
    repositories::ListFilter,
    state::AppState,
};

/// Query parameters for record listing; same semantics as the appointment
/// listing filter, including the empty-`userId`-as-absent handling.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordsQuery {
    pub user_id: Option<String>,
    pub status: Option<String>,
    pub exclude_status: Option<String>,
}

/// Response for record listing
#[derive(Serialize)]
pub struct RecordsResponse {
    pub ok: bool,
    pub records: Vec<Record>,
}

/// Request for a partial record update. Every field is optional; empty
/// strings are treated the same as absent and never clear a stored value.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordStatusRequest {
    pub status: Option<String>,
    pub doctor_response: Option<String>,
    pub doctor_name: Option<String>,
    pub doctor_details: Option<String>,
}

/// Response for a single record
#[derive(Serialize)]
pub struct RecordResponse {
    pub ok: bool,
    pub record: Record,
}

/// Drop empty strings so they read as "not provided".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// List records, newest first
pub async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<ListRecordsQuery>,
) -> ApiResult<impl IntoResponse> {
    let user_id = super::parse_user_id(query.user_id.as_deref())?;
    let filter = ListFilter::from_params(
        user_id,
        query.status.as_deref(),
        query.exclude_status.as_deref(),
    );

    let records = state.record_repository.list(&filter).await.map_err(|e| {
        error!("Failed to list records: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(RecordsResponse { ok: true, records }))
}

/// Apply a practitioner update to a record: status and/or response fields.
pub async fn update_record_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRecordStatusRequest>,
) -> ApiResult<impl IntoResponse> {
    let status = match non_empty(payload.status) {
        Some(s) => Some(
            RecordStatus::parse(&s)
                .ok_or_else(|| ApiError::Validation("invalid status".to_string()))?,
        ),
        None => None,
    };

    let update = RecordUpdate {
        status,
        doctor_response: non_empty(payload.doctor_response),
        doctor_name: non_empty(payload.doctor_name),
        doctor_details: non_empty(payload.doctor_details),
    };

    let record = state
        .record_repository
        .update(id, &update)
        .await
        .map_err(|e| {
            error!("Failed to update record: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("record not found".to_string()))?;

    Ok(Json(RecordResponse { ok: true, record }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_drops_empty_strings() {
        assert_eq!(non_empty(Some("note".to_string())), Some("note".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_empty_status_is_skipped_not_invalid() {
        // An empty status string means "no status change", matching the
        // handling of the other optional fields.
        assert_eq!(non_empty(Some(String::new())), None);
        assert!(RecordStatus::parse("").is_none());
    }
}
