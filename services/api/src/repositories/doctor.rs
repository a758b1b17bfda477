//! Doctor repository for database operations

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;
use uuid::Uuid;

use crate::models::{Doctor, NewDoctor, doctor::normalize_username};

/// Doctor repository
#[derive(Clone)]
pub struct DoctorRepository {
    pool: PgPool,
}

impl DoctorRepository {
    /// Create a new doctor repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new doctor account. The username is stored case-normalized
    /// and the password is hashed before it touches the database.
    pub async fn create(&self, new_doctor: &NewDoctor) -> Result<Doctor> {
        let username = normalize_username(&new_doctor.username);
        info!("Creating new doctor account: {}", username);

        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(new_doctor.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        let row = sqlx::query(
            r#"
            INSERT INTO doctors (username, password_hash, full_name, mobile, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, password_hash, full_name, mobile, email, created_at, updated_at
            "#,
        )
        .bind(&username)
        .bind(&password_hash)
        .bind(&new_doctor.full_name)
        .bind(&new_doctor.mobile)
        .bind(&new_doctor.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(doctor_from_row(&row))
    }

    /// Find a doctor by username (case-normalized lookup)
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Doctor>> {
        let username = normalize_username(username);

        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, full_name, mobile, email, created_at, updated_at
            FROM doctors
            WHERE username = $1
            "#,
        )
        .bind(&username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| doctor_from_row(&row)))
    }

    /// Find a doctor by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Doctor>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, full_name, mobile, email, created_at, updated_at
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| doctor_from_row(&row)))
    }

    /// Verify a doctor's password against the stored digest
    pub fn verify_password(&self, doctor: &Doctor, password: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(&doctor.password_hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }
}

fn doctor_from_row(row: &PgRow) -> Doctor {
    Doctor {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        full_name: row.get("full_name"),
        mobile: row.get("mobile"),
        email: row.get("email"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
