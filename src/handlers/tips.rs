use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::db::Db;
use crate::error::ApiError;
use crate::models::HealthTip;
use crate::response::{ApiResponse, ApiResult, Message};
use crate::validate::Fields;

#[derive(Debug, Deserialize)]
pub struct AddTipRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl AddTipRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require("title", self.title.as_deref())
            .require("content", self.content.as_deref())
            .finish()
    }
}

/// GET /api/tips
pub async fn list(State(db): State<Db>) -> ApiResult<Vec<HealthTip>> {
    let tips = sqlx::query_as::<_, HealthTip>(
        "SELECT id, title, content, created_at FROM health_tips",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(ApiResponse::success(tips))
}

/// POST /api/tips
pub async fn add(State(db): State<Db>, Json(req): Json<AddTipRequest>) -> ApiResult<Message> {
    req.validate()?;

    sqlx::query("INSERT INTO health_tips (title, content) VALUES ($1, $2)")
        .bind(&req.title)
        .bind(&req.content)
        .execute(db.pool())
        .await?;

    Ok(ApiResponse::success(Message::new("Health tip added successfully.")))
}

/// DELETE /api/tips/:id
pub async fn delete(State(db): State<Db>, Path(id): Path<i32>) -> ApiResult<Message> {
    let result = sqlx::query("DELETE FROM health_tips WHERE id = $1")
        .bind(id)
        .execute(db.pool())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Health tip not found."));
    }

    Ok(ApiResponse::success(Message::new("Health tip deleted successfully")))
}
