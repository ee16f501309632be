pub mod alerts;
pub mod appointments;
pub mod auth;
pub mod clinics;
pub mod medications;
pub mod symptoms;
pub mod tips;
pub mod users;
