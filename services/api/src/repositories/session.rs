//! Session repository for database operations

use anyhow::Result;
use chrono::{Duration, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;
use uuid::Uuid;

use crate::models::Session;
use crate::session::generate_token;

/// Session repository
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a session for a doctor with a fresh opaque token and an
    /// absolute expiry of `now + ttl_hours`.
    pub async fn create(&self, doctor_id: Uuid, ttl_hours: i64) -> Result<Session> {
        info!("Creating session for doctor: {}", doctor_id);

        let token = generate_token();
        let expires_at = Utc::now() + Duration::hours(ttl_hours);

        let row = sqlx::query(
            r#"
            INSERT INTO sessions (token, doctor_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, token, doctor_id, created_at, expires_at
            "#,
        )
        .bind(&token)
        .bind(doctor_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(session_from_row(&row))
    }

    /// Find a live session by token. A session whose expiry has passed is
    /// treated as absent here, whether or not the purge task has removed the
    /// row yet.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Session>> {
        let row = sqlx::query(
            r#"
            SELECT id, token, doctor_id, created_at, expires_at
            FROM sessions
            WHERE token = $1 AND expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| session_from_row(&row)))
    }

    /// Delete a session by ID. Idempotent: deleting an absent session is
    /// not an error.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a session by token. Idempotent.
    pub async fn delete_by_token(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove sessions whose expiry has passed, returning how many were
    /// deleted. Housekeeping only; lookup already ignores expired rows.
    pub async fn purge_expired(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn session_from_row(row: &PgRow) -> Session {
    Session {
        id: row.get("id"),
        token: row.get("token"),
        doctor_id: row.get("doctor_id"),
        created_at: row.get("created_at"),
        expires_at: row.get("expires_at"),
    }
}
