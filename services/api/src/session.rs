//! Session configuration, token generation, and expiry purge

use std::time::Duration;

use tracing::{error, info};
use uuid::Uuid;

use crate::repositories::SessionRepository;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session lifetime in hours
    pub ttl_hours: i64,
    /// Interval between expired-session purge runs, in seconds
    pub purge_interval_secs: u64,
}

impl SessionConfig {
    /// Create a new SessionConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SESSION_TTL_HOURS`: Session lifetime in hours (default: 48)
    /// - `SESSION_PURGE_INTERVAL_SECS`: Purge interval in seconds (default: 3600)
    pub fn from_env() -> Self {
        let ttl_hours = std::env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(48);

        let purge_interval_secs = std::env::var("SESSION_PURGE_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600);

        Self {
            ttl_hours,
            purge_interval_secs,
        }
    }
}

/// Generate an opaque session token.
///
/// A UUID v4 gives a collision-resistant random value; the token carries no
/// structure and is only ever matched by equality against the store.
pub fn generate_token() -> String {
    Uuid::new_v4().to_string()
}

/// Spawn the background task that removes expired sessions.
///
/// The store already treats expired sessions as absent on lookup, so this is
/// purely housekeeping to keep the table from growing without bound.
pub fn spawn_expiry_purge(repository: SessionRepository, interval_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;
            match repository.purge_expired().await {
                Ok(0) => {}
                Ok(count) => info!("Purged {} expired sessions", count),
                Err(e) => error!("Failed to purge expired sessions: {}", e),
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_generated_tokens_are_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
        // UUID v4 in hyphenated form
        assert_eq!(a.len(), 36);
    }

    #[test]
    #[serial]
    fn test_session_config_defaults() {
        unsafe {
            std::env::remove_var("SESSION_TTL_HOURS");
            std::env::remove_var("SESSION_PURGE_INTERVAL_SECS");
        }

        let config = SessionConfig::from_env();
        assert_eq!(config.ttl_hours, 48);
        assert_eq!(config.purge_interval_secs, 3600);
    }

    #[test]
    #[serial]
    fn test_session_config_from_env() {
        unsafe {
            std::env::set_var("SESSION_TTL_HOURS", "2");
            std::env::set_var("SESSION_PURGE_INTERVAL_SECS", "60");
        }

        let config = SessionConfig::from_env();
        assert_eq!(config.ttl_hours, 2);
        assert_eq!(config.purge_interval_secs, 60);

        unsafe {
            std::env::remove_var("SESSION_TTL_HOURS");
            std::env::remove_var("SESSION_PURGE_INTERVAL_SECS");
        }
    }
}
