use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Db;
use crate::error::ApiError;
use crate::models::{Appointment, AppointmentStatus, AppointmentWithClinic};
use crate::response::{ApiResponse, ApiResult, Message};
use crate::validate::Fields;

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub user_id: Option<i32>,
    pub clinic_id: Option<i32>,
    pub appointment_at: Option<DateTime<Utc>>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}

impl CreateAppointmentRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require_id("user_id", self.user_id)
            .require_id("clinic_id", self.clinic_id)
            .require_at("appointment_at", self.appointment_at.as_ref())
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct RescheduleRequest {
    pub appointment_at: Option<DateTime<Utc>>,
}

impl RescheduleRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require_at("appointment_at", self.appointment_at.as_ref())
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct AppointmentCreated {
    pub message: &'static str,
    pub appointment: Appointment,
}

/// POST /api/appointments
pub async fn create(
    State(db): State<Db>,
    Json(req): Json<CreateAppointmentRequest>,
) -> ApiResult<AppointmentCreated> {
    req.validate()?;

    let appointment = sqlx::query_as::<_, Appointment>(
        "INSERT INTO appointments (user_id, clinic_id, appointment_at, purpose, notes)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, user_id, clinic_id, appointment_at, purpose, notes, status,
                   created_at, updated_at",
    )
    .bind(req.user_id)
    .bind(req.clinic_id)
    .bind(req.appointment_at)
    .bind(&req.purpose)
    .bind(&req.notes)
    .fetch_one(db.pool())
    .await?;

    Ok(ApiResponse::created(AppointmentCreated {
        message: "Appointment booked successfully",
        appointment,
    }))
}

/// GET /api/appointments/:user_id
pub async fn list_for_user(
    State(db): State<Db>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<AppointmentWithClinic>> {
    let appointments = sqlx::query_as::<_, AppointmentWithClinic>(
        "SELECT a.id, a.user_id, a.clinic_id, a.appointment_at, a.purpose, a.notes,
                a.status, a.created_at, a.updated_at,
                c.name AS clinic_name, c.address
         FROM appointments a
         JOIN clinics c ON a.clinic_id = c.id
         WHERE a.user_id = $1
         ORDER BY a.appointment_at ASC",
    )
    .bind(user_id)
    .fetch_all(db.pool())
    .await?;

    Ok(ApiResponse::success(appointments))
}

/// PATCH /api/appointments/:id/cancel
///
/// Idempotent; a second cancel re-applies the same state and still succeeds.
pub async fn cancel(State(db): State<Db>, Path(id): Path<i32>) -> ApiResult<Message> {
    set_status(&db, id, AppointmentStatus::Cancelled).await?;
    Ok(ApiResponse::success(Message::new("Appointment cancelled")))
}

/// PUT /api/appointments/:id/complete
pub async fn complete(State(db): State<Db>, Path(id): Path<i32>) -> ApiResult<Message> {
    set_status(&db, id, AppointmentStatus::Completed).await?;
    Ok(ApiResponse::success(Message::new("Appointment marked as completed")))
}

/// PUT /api/appointments/:id/reschedule
///
/// Moves the visit and touches updated_at; the status is left alone.
pub async fn reschedule(
    State(db): State<Db>,
    Path(id): Path<i32>,
    Json(req): Json<RescheduleRequest>,
) -> ApiResult<Message> {
    req.validate()?;

    sqlx::query("UPDATE appointments SET appointment_at = $1, updated_at = NOW() WHERE id = $2")
        .bind(req.appointment_at)
        .bind(id)
        .execute(db.pool())
        .await?;

    Ok(ApiResponse::success(Message::new("Appointment rescheduled successfully")))
}

async fn set_status(db: &Db, id: i32, status: AppointmentStatus) -> Result<(), ApiError> {
    sqlx::query("UPDATE appointments SET status = $1, updated_at = NOW() WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(db.pool())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_user_clinic_and_time() {
        let req = CreateAppointmentRequest {
            user_id: Some(1),
            clinic_id: None,
            appointment_at: None,
            purpose: Some("checkup".into()),
            notes: None,
        };
        let err = req.validate().unwrap_err();
        match err {
            ApiError::Validation { missing } => {
                assert_eq!(missing, vec!["clinic_id", "appointment_at"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn purpose_and_notes_are_optional() {
        let req = CreateAppointmentRequest {
            user_id: Some(1),
            clinic_id: Some(2),
            appointment_at: Some(Utc::now()),
            purpose: None,
            notes: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn reschedule_requires_the_new_time() {
        let req = RescheduleRequest { appointment_at: None };
        assert!(req.validate().is_err());
    }
}
