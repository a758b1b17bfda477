//! Patient display information used to enrich listings

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display fields of the patient an appointment or record belongs to.
/// Populated from the patients table when the subject id resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}
