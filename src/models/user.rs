use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full row including the password digest. Only the login flow reads this;
/// everything client-facing goes through [`UserProfile`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub phonenumber: String,
    pub username: String,
    pub password: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Sanitized projection with the digest dropped.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            fullname: self.fullname,
            email: self.email,
            phonenumber: self.phonenumber,
            username: self.username,
            profile_image: self.profile_image,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub phonenumber: String,
    pub username: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_never_carries_the_digest() {
        let user = User {
            id: 1,
            fullname: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phonenumber: "555-0100".into(),
            username: "ada".into(),
            password: "$argon2id$v=19$...".into(),
            profile_image: None,
            created_at: Utc::now(),
        };
        let body = serde_json::to_value(user.into_profile()).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["username"], "ada");
    }
}
