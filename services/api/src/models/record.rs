//! Patient query record model, attachments, and status lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PatientInfo;

/// Record status lifecycle.
///
/// Same open-transition model as appointments: the server validates set
/// membership only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Processing,
    Resolved,
    Completed,
    Failed,
}

impl RecordStatus {
    /// Parse a wire status string. Unknown values are a validation failure.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "resolved" => Some(Self::Resolved),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Resolved => "resolved",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Attachment metadata carried by a record. The `url` is a ready-to-use
/// retrieval URL, not an opaque blob id needing a resolution step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: Option<String>,
    pub url: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
    pub kind: Option<String>,
}

/// Patient query record, enriched with the owning patient's display fields
/// when the subject id resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Uuid,
    pub user_id: Uuid,
    pub query_number: Option<String>,
    pub phone: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub attachments: Vec<Attachment>,
    pub doctor_response: Option<String>,
    pub doctor_name: Option<String>,
    pub doctor_details: Option<String>,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub patient: Option<PatientInfo>,
}

/// New record payload, as produced by the intake flow. Always starts `pending`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub user_id: Uuid,
    pub query_number: Option<String>,
    pub phone: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Partial update applied by a practitioner. Only present fields change;
/// empty strings have already been normalized away by the handler.
#[derive(Debug, Clone, Default)]
pub struct RecordUpdate {
    pub status: Option<RecordStatus>,
    pub doctor_response: Option<String>,
    pub doctor_name: Option<String>,
    pub doctor_details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(RecordStatus::parse("pending"), Some(RecordStatus::Pending));
        assert_eq!(
            RecordStatus::parse("processing"),
            Some(RecordStatus::Processing)
        );
        assert_eq!(RecordStatus::parse("resolved"), Some(RecordStatus::Resolved));
        assert_eq!(
            RecordStatus::parse("completed"),
            Some(RecordStatus::Completed)
        );
        assert_eq!(RecordStatus::parse("failed"), Some(RecordStatus::Failed));
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        assert_eq!(RecordStatus::parse("bogus"), None);
        // Appointment statuses are not record statuses.
        assert_eq!(RecordStatus::parse("confirmed"), None);
    }

    #[test]
    fn test_attachment_wire_shape_is_camel_case() {
        let attachment = Attachment {
            filename: Some("scan.jpg".to_string()),
            url: Some("https://cdn.example.com/scan.jpg".to_string()),
            mime_type: Some("image/jpeg".to_string()),
            size: Some(1024),
            kind: Some("image".to_string()),
        };

        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(json["mimeType"], "image/jpeg");
        assert_eq!(json["url"], "https://cdn.example.com/scan.jpg");
    }

    #[test]
    fn test_attachment_missing_fields_deserialize_as_none() {
        let attachment: Attachment =
            serde_json::from_str(r#"{"filename":"notes.pdf"}"#).unwrap();
        assert_eq!(attachment.filename.as_deref(), Some("notes.pdf"));
        assert!(attachment.url.is_none());
        assert!(attachment.size.is_none());
    }
}
