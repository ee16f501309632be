use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::db::Db;
use crate::error::ApiError;
use crate::models::{User, UserProfile};
use crate::response::{ApiResponse, ApiResult, Message};
use crate::validate::Fields;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SignupRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require("fullname", self.fullname.as_deref())
            .require("email", self.email.as_deref())
            .require("phonenumber", self.phonenumber.as_deref())
            .require("username", self.username.as_deref())
            .require("password", self.password.as_deref())
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require("username", self.username.as_deref())
            .require("password", self.password.as_deref())
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: UserProfile,
}

/// POST /api/auth/signup
pub async fn signup(State(db): State<Db>, Json(req): Json<SignupRequest>) -> ApiResult<Message> {
    req.validate()?;

    let digest = auth::hash_password(req.password.as_deref().unwrap_or_default())?;

    sqlx::query(
        "INSERT INTO users (fullname, email, phonenumber, username, password)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&req.fullname)
    .bind(&req.email)
    .bind(&req.phonenumber)
    .bind(&req.username)
    .bind(&digest)
    .execute(db.pool())
    .await
    .map_err(|e| match ApiError::from(e) {
        // Duplicate email or username; either way the account exists
        ApiError::Conflict(_) => ApiError::conflict("Email or username already registered."),
        other => other,
    })?;

    Ok(ApiResponse::created(Message::new("Signup successful.")))
}

/// POST /api/auth/login
pub async fn login(State(db): State<Db>, Json(req): Json<LoginRequest>) -> ApiResult<LoginResponse> {
    req.validate()?;

    let user = sqlx::query_as::<_, User>(
        "SELECT id, fullname, email, phonenumber, username, password, profile_image, created_at
         FROM users
         WHERE username = $1",
    )
    .bind(&req.username)
    .fetch_optional(db.pool())
    .await?;

    let Some(user) = user else {
        return Err(ApiError::bad_request("User not found."));
    };

    if !auth::verify_password(req.password.as_deref().unwrap_or_default(), &user.password)? {
        return Err(ApiError::bad_request("Incorrect password! Please try again."));
    }

    Ok(ApiResponse::success(LoginResponse {
        message: "Login successful.",
        user: user.into_profile(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_requires_all_five_fields() {
        let req = SignupRequest {
            fullname: Some("Ada Lovelace".into()),
            email: None,
            phonenumber: Some("555-0100".into()),
            username: None,
            password: Some("hunter2".into()),
        };
        let err = req.validate().unwrap_err();
        match err {
            ApiError::Validation { missing } => assert_eq!(missing, vec!["email", "username"]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn login_requires_credentials() {
        let req = LoginRequest {
            username: Some("ada".into()),
            password: None,
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            username: Some("ada".into()),
            password: Some("hunter2".into()),
        };
        assert!(req.validate().is_ok());
    }
}
