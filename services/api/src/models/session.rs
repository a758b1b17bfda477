//! Session model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Session entity
///
/// A session is valid iff it exists in the store, `now < expires_at`, and the
/// referenced doctor still exists. The store's token lookup already treats
/// expired rows as absent; `is_expired` exists for callers holding a session
/// across time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub token: String,
    pub doctor_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session's absolute expiry has passed.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session_expiring_at(expires_at: DateTime<Utc>) -> Session {
        Session {
            id: Uuid::new_v4(),
            token: Uuid::new_v4().to_string(),
            doctor_id: Uuid::new_v4(),
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn test_fresh_session_is_not_expired() {
        let session = session_expiring_at(Utc::now() + Duration::hours(48));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let session = session_expiring_at(Utc::now() - Duration::seconds(1));
        assert!(session.is_expired());
    }
}
