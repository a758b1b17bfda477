//! Repositories for database operations

pub mod appointment;
pub mod doctor;
pub mod record;
pub mod session;

pub use appointment::AppointmentRepository;
pub use doctor::DoctorRepository;
pub use record::RecordRepository;
pub use session::SessionRepository;

use uuid::Uuid;

/// Filter for appointment and record listings.
///
/// `include_status` and `exclude_status` are mutually exclusive by
/// construction: when the caller supplies both, only the inclusion set is
/// consulted and the exclusion set is dropped. This mirrors the documented
/// precedence of the `status` / `excludeStatus` query parameters.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub user_id: Option<Uuid>,
    pub include_status: Option<Vec<String>>,
    pub exclude_status: Option<Vec<String>>,
}

impl ListFilter {
    /// Build a filter from the raw query parameters. The status parameters
    /// are comma-separated lists; empty parameters count as absent.
    pub fn from_params(
        user_id: Option<Uuid>,
        status: Option<&str>,
        exclude_status: Option<&str>,
    ) -> Self {
        let include_status = status.filter(|s| !s.is_empty()).map(parse_status_csv);

        // Inclusion takes precedence: exclusion applies only when no
        // inclusion list was supplied.
        let exclude_status = if include_status.is_some() {
            None
        } else {
            exclude_status
                .filter(|s| !s.is_empty())
                .map(parse_status_csv)
        };

        Self {
            user_id,
            include_status,
            exclude_status,
        }
    }
}

fn parse_status_csv(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
