use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::Db;
use crate::error::ApiError;
use crate::models::Medication;
use crate::response::{ApiResponse, ApiResult, Message};
use crate::validate::Fields;

#[derive(Debug, Deserialize)]
pub struct CreateMedicationRequest {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub dose: Option<String>,
    pub times: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl CreateMedicationRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require_id("user_id", self.user_id)
            .require("name", self.name.as_deref())
            .require("dose", self.dose.as_deref())
            .require_list("times", self.times.as_deref())
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct MedicationDeleted {
    pub message: &'static str,
    pub medication: Medication,
}

/// POST /api/medications
pub async fn create(
    State(db): State<Db>,
    Json(req): Json<CreateMedicationRequest>,
) -> ApiResult<Message> {
    req.validate()?;

    sqlx::query(
        "INSERT INTO medications (user_id, name, dose, times, notes)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(req.user_id)
    .bind(&req.name)
    .bind(&req.dose)
    .bind(&req.times)
    .bind(&req.notes)
    .execute(db.pool())
    .await?;

    Ok(ApiResponse::success(Message::new("Medication added successfully")))
}

/// GET /api/medications/:user_id
pub async fn list_for_user(
    State(db): State<Db>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<Medication>> {
    let medications = sqlx::query_as::<_, Medication>(
        "SELECT id, user_id, name, dose, times, notes, created_at
         FROM medications
         WHERE user_id = $1
         ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db.pool())
    .await?;

    Ok(ApiResponse::success(medications))
}

/// GET /api/medications/med/:id
pub async fn get_one(State(db): State<Db>, Path(id): Path<i32>) -> ApiResult<Medication> {
    let medication = sqlx::query_as::<_, Medication>(
        "SELECT id, user_id, name, dose, times, notes, created_at
         FROM medications
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db.pool())
    .await?;

    match medication {
        Some(medication) => Ok(ApiResponse::success(medication)),
        None => Err(ApiError::not_found("Medication not found")),
    }
}

/// DELETE /api/medications/:id
pub async fn delete(State(db): State<Db>, Path(id): Path<i32>) -> ApiResult<MedicationDeleted> {
    let medication = sqlx::query_as::<_, Medication>(
        "DELETE FROM medications
         WHERE id = $1
         RETURNING id, user_id, name, dose, times, notes, created_at",
    )
    .bind(id)
    .fetch_optional(db.pool())
    .await?;

    match medication {
        Some(medication) => Ok(ApiResponse::success(MedicationDeleted {
            message: "Medication deleted successfully",
            medication,
        })),
        None => Err(ApiError::not_found("Medication not found")),
    }
}
