//! Application state shared across handlers

use sqlx::PgPool;

use crate::repositories::{
    AppointmentRepository, DoctorRepository, RecordRepository, SessionRepository,
};
use crate::session::SessionConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub doctor_repository: DoctorRepository,
    pub session_repository: SessionRepository,
    pub appointment_repository: AppointmentRepository,
    pub record_repository: RecordRepository,
    pub session_config: SessionConfig,
}

impl AppState {
    /// Build the application state from a connection pool and session config.
    pub fn new(db_pool: PgPool, session_config: SessionConfig) -> Self {
        Self {
            doctor_repository: DoctorRepository::new(db_pool.clone()),
            session_repository: SessionRepository::new(db_pool.clone()),
            appointment_repository: AppointmentRepository::new(db_pool.clone()),
            record_repository: RecordRepository::new(db_pool.clone()),
            db_pool,
            session_config,
        }
    }
}
