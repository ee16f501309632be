use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Medication {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub dose: String,
    /// Reminder times in the order the user entered them.
    pub times: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
