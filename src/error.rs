// HTTP API error types shared by every handler
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;

/// Postgres unique-constraint violation, the one store error the API
/// translates into a client-visible outcome.
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request - domain-level rejection (unknown user on login, etc.)
    #[error("{0}")]
    BadRequest(String),

    // 400 Bad Request - required fields absent from the payload
    #[error("missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    // 400 Bad Request - unique-constraint conflict surfaced by the store
    #[error("{0}")]
    Conflict(String),

    // 404 Not Found - the addressed row does not exist
    #[error("{0}")]
    NotFound(String),

    // 500 Internal Server Error - store/filesystem failure, logged server-side
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe response body. Client faults carry `message`, server
    /// faults carry `error` with no internal detail.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::BadRequest(msg) => json!({ "message": msg }),
            ApiError::Validation { missing } => json!({
                "message": "Missing required fields",
                "missing": missing,
            }),
            ApiError::Conflict(msg) => json!({ "message": msg }),
            ApiError::NotFound(msg) => json!({ "message": msg }),
            ApiError::Internal(msg) => json!({ "error": msg }),
        }
    }
}

// Static constructors, mirrored by the handlers
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

/// Centralized store-error classification. Everything unclassified is logged
/// with full detail here and leaves the process as a generic 500.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::not_found("Record not found"),
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                ApiError::conflict("Duplicate value violates a unique constraint")
            }
            other => {
                tracing::error!("database error: {}", other);
                ApiError::internal("An unexpected error occurred")
            }
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("filesystem error: {}", err);
        ApiError::internal("An unexpected error occurred")
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::bad_request(format!("Malformed multipart request: {}", err))
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
