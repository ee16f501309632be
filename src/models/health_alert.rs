use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HealthAlert {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub location: Option<String>,
    pub alert_type: Option<String>,
    pub icon: Option<String>,
    /// Deactivation flips this flag; deletion removes the row.
    pub is_active: bool,
    pub published_at: DateTime<Utc>,
}
