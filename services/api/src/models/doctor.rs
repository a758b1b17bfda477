//! Doctor (practitioner) model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Doctor entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Doctor {
    /// Public projection of the account, safe to return to clients.
    /// The password hash never leaves the server.
    pub fn public(&self) -> DoctorPublic {
        DoctorPublic {
            id: self.id,
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            mobile: self.mobile.clone(),
            email: self.email.clone(),
        }
    }
}

/// Doctor profile as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPublic {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

/// New doctor creation payload; the password is still plaintext here and is
/// hashed by the repository on insert.
#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

/// Normalize a username for storage and lookup: lowercase and trimmed.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("  Dr_Amit "), "dr_amit");
        assert_eq!(normalize_username("testdoctor"), "testdoctor");
    }

    #[test]
    fn test_public_projection_hides_hash() {
        let doctor = Doctor {
            id: Uuid::new_v4(),
            username: "dr_amit".to_string(),
            password_hash: "secret-digest".to_string(),
            full_name: Some("Dr. Amit".to_string()),
            mobile: None,
            email: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(doctor.public()).unwrap();
        assert_eq!(json["username"], "dr_amit");
        assert_eq!(json["fullName"], "Dr. Amit");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
