use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

/// Wrapper for success responses. The payload is serialized bare - lists and
/// records go out as-is, mutations send `{message, <entity>: record}` structs
/// defined next to their handlers.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status_code: Option<StatusCode>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK response
    pub fn success(data: T) -> Self {
        Self {
            data,
            status_code: None,
        }
    }

    /// 201 Created response
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self {
            data,
            status_code: Some(status_code),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);
        match serde_json::to_value(&self.data) {
            Ok(value) => (status, Json(value)).into_response(),
            Err(e) => {
                tracing::error!("failed to serialize response body: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to serialize response" })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

/// Bare `{message}` body used by mutations that return nothing else.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_ok() {
        let res = ApiResponse::success(Message::new("done"));
        assert_eq!(res.status_code, None);
    }

    #[test]
    fn created_overrides_status() {
        let res = ApiResponse::created(Message::new("done"));
        assert_eq!(res.status_code, Some(StatusCode::CREATED));
    }

    #[test]
    fn message_serializes_bare() {
        let body = serde_json::to_value(Message::new("Clinic added successfully.")).unwrap();
        assert_eq!(body, json!({ "message": "Clinic added successfully." }));
    }
}
