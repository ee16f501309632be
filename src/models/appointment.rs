use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Appointment lifecycle. Stored as text; new rows default to `scheduled`,
/// rescheduling touches the timestamp only and leaves the status alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Appointment {
    pub id: i32,
    pub user_id: i32,
    pub clinic_id: i32,
    pub appointment_at: DateTime<Utc>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List row joined with the clinic the visit is booked at.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AppointmentWithClinic {
    pub id: i32,
    pub user_id: i32,
    pub clinic_id: i32,
    pub appointment_at: DateTime<Utc>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub clinic_name: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_the_stored_spelling() {
        assert_eq!(AppointmentStatus::Scheduled.as_str(), "scheduled");
        assert_eq!(AppointmentStatus::Cancelled.as_str(), "cancelled");
        assert_eq!(AppointmentStatus::Completed.as_str(), "completed");
    }
}
