use argon2::{
    Argon2,
    password_hash::{PasswordHasher, PasswordVerifier, phc::PasswordHash},
};

use crate::error::{AppError, AppResult};

/// Hash a password using Argon2id with a fresh random salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes())
        .map_err(|e| AppError::Internal {
            source: anyhow::anyhow!("Failed to hash password: {}", e),
        })?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored PHC hash.
///
/// A malformed stored hash is an internal error; a mismatch is `Ok(false)`.
pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Stored password hash is malformed: {}", e),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let hash = hash_password("bismillah-123").expect("Failed to hash password");
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("bismillah-123"));
    }

    #[test]
    fn test_verify_password_roundtrip() {
        let hash = hash_password("bismillah-123").expect("Failed to hash password");
        assert!(verify_password("bismillah-123", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_different_salts_for_same_password() {
        let hash1 = hash_password("bismillah-123").unwrap();
        let hash2 = hash_password("bismillah-123").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_against_plaintext_is_error() {
        assert!(verify_password("secret", "secret").is_err());
    }
}
