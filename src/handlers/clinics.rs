use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::db::Db;
use crate::error::ApiError;
use crate::models::Clinic;
use crate::response::{ApiResponse, ApiResult, Message};
use crate::validate::Fields;

#[derive(Debug, Deserialize)]
pub struct AddClinicRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phonenumber: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub services: Option<Vec<String>>,
    pub operating_hours: Option<String>,
}

impl AddClinicRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require("name", self.name.as_deref())
            .require("address", self.address.as_deref())
            .require("phonenumber", self.phonenumber.as_deref())
            .require("email", self.email.as_deref())
            .finish()
    }
}

/// GET /api/clinics
pub async fn list(State(db): State<Db>) -> ApiResult<Vec<Clinic>> {
    let clinics = sqlx::query_as::<_, Clinic>(
        "SELECT id, name, address, phonenumber, email, latitude, longitude,
                services, operating_hours, created_at
         FROM clinics
         ORDER BY name ASC",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(ApiResponse::success(clinics))
}

/// POST /api/clinics
pub async fn add(State(db): State<Db>, Json(req): Json<AddClinicRequest>) -> ApiResult<Message> {
    req.validate()?;

    sqlx::query(
        "INSERT INTO clinics (name, address, phonenumber, email, latitude, longitude,
                              services, operating_hours)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(&req.name)
    .bind(&req.address)
    .bind(&req.phonenumber)
    .bind(&req.email)
    .bind(req.latitude)
    .bind(req.longitude)
    .bind(&req.services)
    .bind(&req.operating_hours)
    .execute(db.pool())
    .await?;

    Ok(ApiResponse::created(Message::new("Clinic added successfully.")))
}
