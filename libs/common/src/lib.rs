//! Common library for the clinic backend
//!
//! This crate provides shared infrastructure used by the clinic services:
//! database connectivity, health checks, and error handling.

pub mod database;
pub mod error;
