use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::db::Db;
use crate::error::ApiError;
use crate::models::SymptomEntry;
use crate::response::{ApiResponse, ApiResult, Message};
use crate::validate::Fields;

#[derive(Debug, Deserialize)]
pub struct AddSymptomRequest {
    pub user_id: Option<i32>,
    pub symptom: Option<String>,
    pub severity: Option<String>,
    pub notes: Option<String>,
}

impl AddSymptomRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require_id("user_id", self.user_id)
            .require("symptom", self.symptom.as_deref())
            .require("severity", self.severity.as_deref())
            .finish()
    }
}

/// GET /api/symptoms/:user_id
pub async fn list_for_user(
    State(db): State<Db>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<SymptomEntry>> {
    let entries = sqlx::query_as::<_, SymptomEntry>(
        "SELECT id, user_id, symptom, severity, notes, created_at
         FROM symptoms
         WHERE user_id = $1
         ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db.pool())
    .await?;

    Ok(ApiResponse::success(entries))
}

/// POST /api/symptoms
pub async fn add(State(db): State<Db>, Json(req): Json<AddSymptomRequest>) -> ApiResult<Message> {
    req.validate()?;

    sqlx::query(
        "INSERT INTO symptoms (user_id, symptom, severity, notes)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(req.user_id)
    .bind(&req.symptom)
    .bind(&req.severity)
    .bind(req.notes.as_deref().unwrap_or(""))
    .execute(db.pool())
    .await?;

    Ok(ApiResponse::created(Message::new("Symptom added successfully")))
}

/// DELETE /api/symptoms/:id
pub async fn delete(State(db): State<Db>, Path(id): Path<i32>) -> ApiResult<Message> {
    let result = sqlx::query("DELETE FROM symptoms WHERE id = $1")
        .bind(id)
        .execute(db.pool())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("No symptom found"));
    }

    Ok(ApiResponse::success(Message::new("Symptom deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_requires_user_symptom_and_severity() {
        let req = AddSymptomRequest {
            user_id: None,
            symptom: Some("headache".into()),
            severity: None,
            notes: None,
        };
        let err = req.validate().unwrap_err();
        match err {
            ApiError::Validation { missing } => assert_eq!(missing, vec!["user_id", "severity"]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn notes_are_optional() {
        let req = AddSymptomRequest {
            user_id: Some(1),
            symptom: Some("headache".into()),
            severity: Some("mild".into()),
            notes: None,
        };
        assert!(req.validate().is_ok());
    }
}
