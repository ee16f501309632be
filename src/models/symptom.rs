use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SymptomEntry {
    pub id: i32,
    pub user_id: i32,
    pub symptom: String,
    pub severity: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}
