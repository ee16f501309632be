pub mod appointment;
pub mod clinic;
pub mod health_alert;
pub mod health_tip;
pub mod medication;
pub mod symptom;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus, AppointmentWithClinic};
pub use clinic::Clinic;
pub use health_alert::HealthAlert;
pub use health_tip::HealthTip;
pub use medication::Medication;
pub use symptom::SymptomEntry;
pub use user::{User, UserProfile};
