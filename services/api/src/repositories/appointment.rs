//! Appointment repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus, NewAppointment, PatientInfo};
use crate::repositories::ListFilter;

/// Appointment repository
#[derive(Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Create a new appointment repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new appointment. Status always starts as `pending`.
    pub async fn create(&self, new_appointment: &NewAppointment) -> Result<Appointment> {
        let row = sqlx::query(
            r#"
            INSERT INTO appointments
                (user_id, full_name, mobile, age, problem, preferred_date, preferred_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, full_name, mobile, age, problem,
                      preferred_date, preferred_time, status, created_at, updated_at
            "#,
        )
        .bind(new_appointment.user_id)
        .bind(&new_appointment.full_name)
        .bind(&new_appointment.mobile)
        .bind(new_appointment.age)
        .bind(&new_appointment.problem)
        .bind(new_appointment.preferred_date)
        .bind(&new_appointment.preferred_time)
        .fetch_one(&self.pool)
        .await?;

        appointment_from_row(&row)
    }

    /// List appointments matching the filter, newest first, each enriched
    /// with the owning patient's display fields when the subject resolves.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Appointment>> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.user_id, a.full_name, a.mobile, a.age, a.problem,
                   a.preferred_date, a.preferred_time, a.status, a.created_at, a.updated_at,
                   p.id AS patient_id, p.full_name AS patient_full_name,
                   p.mobile AS patient_mobile, p.email AS patient_email,
                   p.age AS patient_age, p.gender AS patient_gender
            FROM appointments a
            LEFT JOIN patients p ON p.id = a.user_id
            WHERE ($1::uuid IS NULL OR a.user_id = $1)
              AND ($2::text[] IS NULL OR a.status = ANY($2))
              AND ($3::text[] IS NULL OR NOT (a.status = ANY($3)))
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(filter.user_id)
        .bind(&filter.include_status)
        .bind(&filter.exclude_status)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let mut appointment = appointment_from_row(row)?;
                appointment.patient = patient_from_row(row);
                Ok(appointment)
            })
            .collect()
    }

    /// Set the status of an appointment, returning the updated entity or
    /// `None` if no appointment has that id. No transition graph is
    /// enforced: any status may move to any other.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>> {
        let row = sqlx::query(
            r#"
            UPDATE appointments
            SET status = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, user_id, full_name, mobile, age, problem,
                      preferred_date, preferred_time, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| appointment_from_row(&row)).transpose()
    }
}

fn appointment_from_row(row: &PgRow) -> Result<Appointment> {
    let status: String = row.get("status");
    let status = AppointmentStatus::parse(&status)
        .ok_or_else(|| anyhow::anyhow!("Unknown appointment status in store: {}", status))?;

    Ok(Appointment {
        id: row.get("id"),
        user_id: row.get("user_id"),
        full_name: row.get("full_name"),
        mobile: row.get("mobile"),
        age: row.get("age"),
        problem: row.get("problem"),
        preferred_date: row.get("preferred_date"),
        preferred_time: row.get("preferred_time"),
        status,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        patient: None,
    })
}

pub(crate) fn patient_from_row(row: &PgRow) -> Option<PatientInfo> {
    let patient_id: Option<Uuid> = row.get("patient_id");

    patient_id.map(|id| PatientInfo {
        id,
        full_name: row.get("patient_full_name"),
        mobile: row.get("patient_mobile"),
        email: row.get("patient_email"),
        age: row.get("patient_age"),
        gender: row.get("patient_gender"),
    })
}
