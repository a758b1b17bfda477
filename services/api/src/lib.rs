//! Clinic backend API service
//!
//! REST backend for the clinic: practitioner authentication with opaque
//! session tokens, and the status-transition workflows for appointments and
//! patient query records.

pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod state;
pub mod validation;
