//! Domain models for the clinic backend

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod record;
pub mod session;

pub use appointment::{Appointment, AppointmentStatus, NewAppointment};
pub use doctor::{Doctor, DoctorPublic, NewDoctor};
pub use patient::PatientInfo;
pub use record::{Attachment, NewRecord, Record, RecordStatus, RecordUpdate};
pub use session::Session;
