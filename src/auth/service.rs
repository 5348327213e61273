//! Password hashing and verification (argon2, random salt).

use crate::error::{AppError, AppResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::ValidateEmail;

/// Minimum accepted password length; exactly this many characters is fine.
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct PasswordService;

impl PasswordService {
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))?
            .to_string();
        Ok(hash)
    }

    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("parse hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    pub fn validate_email(email: &str) -> AppResult<()> {
        if !email.validate_email() {
            return Err(AppError::InvalidInput("Invalid email".to_string()));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> AppResult<()> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let hash = PasswordService::hash_password("mypassword").unwrap();
        assert_ne!(hash, "mypassword");
        assert!(PasswordService::verify_password("mypassword", &hash).unwrap());
        assert!(!PasswordService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn validate_email_accepts_valid() {
        assert!(PasswordService::validate_email("user@example.com").is_ok());
        assert!(PasswordService::validate_email("a@b.co").is_ok());
    }

    #[test]
    fn validate_email_rejects_invalid() {
        assert!(PasswordService::validate_email("invalid").is_err());
        assert!(PasswordService::validate_email("@nodomain").is_err());
        assert!(PasswordService::validate_email("").is_err());
    }

    #[test]
    fn password_length_boundary() {
        assert!(PasswordService::validate_password("12345").is_err());
        assert!(PasswordService::validate_password("123456").is_ok());
        assert!(PasswordService::validate_password("1234567").is_ok());
    }
}
