use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::db::Db;
use crate::error::ApiError;
use crate::models::HealthAlert;
use crate::response::{ApiResponse, ApiResult, Message};
use crate::validate::Fields;

#[derive(Debug, Deserialize)]
pub struct AddAlertRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<String>,
    pub location: Option<String>,
    pub alert_type: Option<String>,
    pub icon: Option<String>,
}

impl AddAlertRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require("title", self.title.as_deref())
            .require("message", self.message.as_deref())
            .require("severity", self.severity.as_deref())
            .finish()
    }
}

/// GET /api/alerts - active alerts only; deactivated rows stay in the store
pub async fn list_active(State(db): State<Db>) -> ApiResult<Vec<HealthAlert>> {
    let alerts = sqlx::query_as::<_, HealthAlert>(
        "SELECT id, title, message, severity, location, alert_type, icon,
                is_active, published_at
         FROM health_alerts
         WHERE is_active = true
         ORDER BY published_at DESC",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(ApiResponse::success(alerts))
}

/// POST /api/alerts
pub async fn add(State(db): State<Db>, Json(req): Json<AddAlertRequest>) -> ApiResult<Message> {
    req.validate()?;

    sqlx::query(
        "INSERT INTO health_alerts (title, message, severity, location, alert_type, icon, is_active)
         VALUES ($1, $2, $3, $4, $5, $6, true)",
    )
    .bind(&req.title)
    .bind(&req.message)
    .bind(&req.severity)
    .bind(&req.location)
    .bind(&req.alert_type)
    .bind(&req.icon)
    .execute(db.pool())
    .await?;

    Ok(ApiResponse::created(Message::new("Health alert created successfully.")))
}

/// PATCH /api/alerts/:id/deactivate
pub async fn deactivate(State(db): State<Db>, Path(id): Path<i32>) -> ApiResult<Message> {
    let result = sqlx::query("UPDATE health_alerts SET is_active = false WHERE id = $1")
        .bind(id)
        .execute(db.pool())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Health alert not found."));
    }

    Ok(ApiResponse::success(Message::new("Health alert deactivated successfully.")))
}

/// DELETE /api/alerts/:id
pub async fn delete(State(db): State<Db>, Path(id): Path<i32>) -> ApiResult<Message> {
    let result = sqlx::query("DELETE FROM health_alerts WHERE id = $1")
        .bind(id)
        .execute(db.pool())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Health alert not found."));
    }

    Ok(ApiResponse::success(Message::new("Health alert deleted successfully.")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_requires_title_message_severity() {
        let req = AddAlertRequest {
            title: Some("Flu season".into()),
            message: None,
            severity: None,
            location: Some("Downtown".into()),
            alert_type: None,
            icon: None,
        };
        let err = req.validate().unwrap_err();
        match err {
            ApiError::Validation { missing } => assert_eq!(missing, vec!["message", "severity"]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn optional_fields_do_not_gate_the_alert() {
        let req = AddAlertRequest {
            title: Some("Flu season".into()),
            message: Some("Cases rising".into()),
            severity: Some("medium".into()),
            location: None,
            alert_type: None,
            icon: None,
        };
        assert!(req.validate().is_ok());
    }
}
