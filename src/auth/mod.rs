use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::ApiError;

/// Hash a plaintext credential into an argon2id PHC string. The digest format
/// is opaque to callers and carries its own salt.
pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!("password hashing failed: {}", e);
            ApiError::internal("An unexpected error occurred")
        })?;
    Ok(digest.to_string())
}

/// Verify a plaintext credential against a stored digest. A mismatch is
/// `Ok(false)`; an unparsable digest is a server fault.
pub fn verify_password(plain: &str, digest: &str) -> Result<bool, ApiError> {
    let parsed = PasswordHash::new(digest).map_err(|e| {
        tracing::error!("stored password digest is unparsable: {}", e);
        ApiError::internal("An unexpected error occurred")
    })?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => {
            tracing::error!("password verification failed: {}", e);
            Err(ApiError::internal("An unexpected error occurred"))
        }
    }
}
