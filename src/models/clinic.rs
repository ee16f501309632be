use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Clinic {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phonenumber: String,
    pub email: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub services: Option<Vec<String>>,
    pub operating_hours: Option<String>,
    pub created_at: DateTime<Utc>,
}
