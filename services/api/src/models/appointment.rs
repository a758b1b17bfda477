//! Appointment model and status lifecycle

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PatientInfo;

/// Appointment status lifecycle.
///
/// `pending` is the sole initial state. The server enforces membership in
/// this set but no transition graph: any status may move to any other,
/// including no-ops. Terminal states are a client-side convention only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Parse a wire status string. Unknown values are a validation failure.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Appointment entity, enriched with the owning patient's display fields
/// when the subject id resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub age: Option<i32>,
    pub problem: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub patient: Option<PatientInfo>,
}

/// New appointment payload, as produced by the intake flow.
/// Status is not part of the payload; new appointments are always `pending`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub age: Option<i32>,
    pub problem: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(
            AppointmentStatus::parse("pending"),
            Some(AppointmentStatus::Pending)
        );
        assert_eq!(
            AppointmentStatus::parse("confirmed"),
            Some(AppointmentStatus::Confirmed)
        );
        assert_eq!(
            AppointmentStatus::parse("completed"),
            Some(AppointmentStatus::Completed)
        );
        assert_eq!(
            AppointmentStatus::parse("cancelled"),
            Some(AppointmentStatus::Cancelled)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        assert_eq!(AppointmentStatus::parse("bogus"), None);
        assert_eq!(AppointmentStatus::parse(""), None);
        // Record statuses are not appointment statuses.
        assert_eq!(AppointmentStatus::parse("processing"), None);
        // No case folding on the wire value.
        assert_eq!(AppointmentStatus::parse("Pending"), None);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&AppointmentStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            assert_eq!(AppointmentStatus::parse(status.as_str()), Some(status));
        }
    }
}
