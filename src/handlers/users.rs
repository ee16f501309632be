use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;
use crate::db::Db;
use crate::error::ApiError;
use crate::models::UserProfile;
use crate::response::{ApiResponse, ApiResult, Message};
use crate::validate::Fields;

const PROFILE_IMAGE_FIELD: &str = "profileImage";

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<String>,
    pub username: Option<String>,
}

impl UpdateProfileRequest {
    fn validate(&self) -> Result<(), ApiError> {
        Fields::new()
            .require("fullname", self.fullname.as_deref())
            .require("email", self.email.as_deref())
            .require("phonenumber", self.phonenumber.as_deref())
            .require("username", self.username.as_deref())
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileImageResponse {
    pub message: &'static str,
    pub profile_image: String,
}

/// GET /api/users/:id
pub async fn get_profile(State(db): State<Db>, Path(id): Path<i32>) -> ApiResult<UserProfile> {
    let profile = sqlx::query_as::<_, UserProfile>(
        "SELECT id, fullname, email, phonenumber, username, profile_image, created_at
         FROM users
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db.pool())
    .await?;

    match profile {
        Some(profile) => Ok(ApiResponse::success(profile)),
        None => Err(ApiError::not_found("User not found")),
    }
}

/// PUT /api/users/:id
pub async fn update_profile(
    State(db): State<Db>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Message> {
    req.validate()?;

    let result = sqlx::query(
        "UPDATE users
         SET fullname = $1, email = $2, phonenumber = $3, username = $4
         WHERE id = $5",
    )
    .bind(&req.fullname)
    .bind(&req.email)
    .bind(&req.phonenumber)
    .bind(&req.username)
    .bind(id)
    .execute(db.pool())
    .await
    .map_err(|e| match ApiError::from(e) {
        ApiError::Conflict(_) => ApiError::conflict("Email or username already registered."),
        other => other,
    })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("User not found"));
    }

    Ok(ApiResponse::success(Message::new("Profile updated successfully")))
}

/// POST /api/users/upload-profile/:id
///
/// Stores the uploaded file under a generated name, then swaps the user's
/// profile_image reference inside one transaction. The replaced file is
/// unlinked best-effort after commit.
pub async fn upload_profile_image(
    State(db): State<Db>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> ApiResult<ProfileImageResponse> {
    let mut upload: Option<(String, axum::body::Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PROFILE_IMAGE_FIELD) {
            continue;
        }
        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some((original_name, bytes));
        break;
    }

    let Some((original_name, bytes)) = upload else {
        return Err(ApiError::Validation {
            missing: vec![PROFILE_IMAGE_FIELD],
        });
    };

    let filename = match std::path::Path::new(&original_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{}.{}", Uuid::new_v4().simple(), ext),
        None => Uuid::new_v4().simple().to_string(),
    };

    let profile_dir = config::config().upload_dir.join("profile");
    tokio::fs::create_dir_all(&profile_dir).await?;
    let stored_path = profile_dir.join(&filename);
    tokio::fs::write(&stored_path, &bytes).await?;

    // Read-then-update on the same transaction; a missing row aborts both.
    let outcome: Result<Option<String>, ApiError> = async {
        let mut tx = db.pool().begin().await?;

        let previous: Option<Option<String>> =
            sqlx::query_scalar("SELECT profile_image FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(previous) = previous else {
            return Err(ApiError::not_found("User not found"));
        };

        sqlx::query("UPDATE users SET profile_image = $1 WHERE id = $2")
            .bind(&filename)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(previous)
    }
    .await;

    let previous = match outcome {
        Ok(previous) => previous,
        Err(err) => {
            // The row was never updated; don't leave the orphan file behind
            let _ = tokio::fs::remove_file(&stored_path).await;
            return Err(err);
        }
    };

    if let Some(previous) = previous {
        let _ = tokio::fs::remove_file(profile_dir.join(previous)).await;
    }

    Ok(ApiResponse::success(ProfileImageResponse {
        message: "Profile image uploaded successfully",
        profile_image: format!("/uploads/profile/{}", filename),
    }))
}
