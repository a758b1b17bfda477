//! Record repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row, postgres::PgRow, types::Json};
use uuid::Uuid;

use crate::models::{Attachment, NewRecord, Record, RecordStatus, RecordUpdate};
use crate::repositories::{ListFilter, appointment::patient_from_row};

/// Record repository
#[derive(Clone)]
pub struct RecordRepository {
    pool: PgPool,
}

impl RecordRepository {
    /// Create a new record repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new record. Status always starts as `pending`; attachments
    /// are stored as a JSONB array.
    pub async fn create(&self, new_record: &NewRecord) -> Result<Record> {
        let row = sqlx::query(
            r#"
            INSERT INTO records (user_id, query_number, phone, summary, details, attachments)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, query_number, phone, summary, details, attachments,
                      doctor_response, doctor_name, doctor_details, status,
                      created_at, updated_at
            "#,
        )
        .bind(new_record.user_id)
        .bind(&new_record.query_number)
        .bind(&new_record.phone)
        .bind(&new_record.summary)
        .bind(&new_record.details)
        .bind(Json(&new_record.attachments))
        .fetch_one(&self.pool)
        .await?;

        record_from_row(&row)
    }

    /// List records matching the filter, newest first, each enriched with
    /// the owning patient's display fields when the subject resolves.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Record>> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.user_id, r.query_number, r.phone, r.summary, r.details,
                   r.attachments, r.doctor_response, r.doctor_name, r.doctor_details,
                   r.status, r.created_at, r.updated_at,
                   p.id AS patient_id, p.full_name AS patient_full_name,
                   p.mobile AS patient_mobile, p.email AS patient_email,
                   p.age AS patient_age, p.gender AS patient_gender
            FROM records r
            LEFT JOIN patients p ON p.id = r.user_id
            WHERE ($1::uuid IS NULL OR r.user_id = $1)
              AND ($2::text[] IS NULL OR r.status = ANY($2))
              AND ($3::text[] IS NULL OR NOT (r.status = ANY($3)))
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(filter.user_id)
        .bind(&filter.include_status)
        .bind(&filter.exclude_status)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let mut record = record_from_row(row)?;
                record.patient = patient_from_row(row);
                Ok(record)
            })
            .collect()
    }

    /// Apply a partial practitioner update, returning the updated entity or
    /// `None` if no record has that id. Only fields present in the update
    /// change; everything else keeps its stored value.
    pub async fn update(&self, id: Uuid, update: &RecordUpdate) -> Result<Option<Record>> {
        let row = sqlx::query(
            r#"
            UPDATE records
            SET status = COALESCE($2, status),
                doctor_response = COALESCE($3, doctor_response),
                doctor_name = COALESCE($4, doctor_name),
                doctor_details = COALESCE($5, doctor_details),
                updated_at = now()
            WHERE id = $1
            RETURNING id, user_id, query_number, phone, summary, details, attachments,
                      doctor_response, doctor_name, doctor_details, status,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.status.map(|s| s.as_str()))
        .bind(&update.doctor_response)
        .bind(&update.doctor_name)
        .bind(&update.doctor_details)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| record_from_row(&row)).transpose()
    }
}

fn record_from_row(row: &PgRow) -> Result<Record> {
    let status: String = row.get("status");
    let status = RecordStatus::parse(&status)
        .ok_or_else(|| anyhow::anyhow!("Unknown record status in store: {}", status))?;

    let Json(attachments): Json<Vec<Attachment>> = row.get("attachments");

    Ok(Record {
        id: row.get("id"),
        user_id: row.get("user_id"),
        query_number: row.get("query_number"),
        phone: row.get("phone"),
        summary: row.get("summary"),
        details: row.get("details"),
        attachments,
        doctor_response: row.get("doctor_response"),
        doctor_name: row.get("doctor_name"),
        doctor_details: row.get("doctor_details"),
        status,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        patient: None,
    })
}
