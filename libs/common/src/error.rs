//! Custom error types for the common library

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatabaseError::Migration("checksum mismatch".to_string());
        assert_eq!(
            err.to_string(),
            "Database migration error: checksum mismatch"
        );

        let err = DatabaseError::Configuration("DATABASE_URL not set".to_string());
        assert_eq!(
            err.to_string(),
            "Database configuration error: DATABASE_URL not set"
        );
    }
}
