//! JWT issue and validation.

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Tokens are good for 24 hours from issuance; there is no server-side
/// revocation, so a discarded token simply ages out.
const TOKEN_LIFETIME_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub exp: i64,
    pub iat: i64,
}

#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
}

impl JwtSecret {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn issue(&self, user_id: i64) -> AppResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    fn issue_at(&self, user_id: i64, now: DateTime<Utc>) -> AppResult<String> {
        let exp = (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Unauthorized(format!("Token error: {}", e)))?;
        Ok(token)
    }

    pub fn validate(&self, token: &str) -> AppResult<i64> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        // Exact 24-hour boundary, no grace period.
        validation.leeway = 0;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;
        data.claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_validate_recovers_user_id() {
        let jwt = JwtSecret::new("test-secret".to_string());
        let token = jwt.issue(42).unwrap();
        assert_eq!(jwt.validate(&token).unwrap(), 42);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let issuer = JwtSecret::new("secret-a".to_string());
        let verifier = JwtSecret::new("secret-b".to_string());
        let token = issuer.issue(42).unwrap();
        assert!(verifier.validate(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = JwtSecret::new("test-secret".to_string());
        assert!(jwt.validate("not.a.token").is_err());
        assert!(jwt.validate("").is_err());
    }

    #[test]
    fn token_valid_just_before_expiry() {
        let jwt = JwtSecret::new("test-secret".to_string());
        // Issued 23h59m ago: one minute of life left.
        let issued = Utc::now() - Duration::hours(23) - Duration::minutes(59);
        let token = jwt.issue_at(7, issued).unwrap();
        assert_eq!(jwt.validate(&token).unwrap(), 7);
    }

    #[test]
    fn token_rejected_just_after_expiry() {
        let jwt = JwtSecret::new("test-secret".to_string());
        // Issued 24h01m ago: expired one minute ago.
        let issued = Utc::now() - Duration::hours(24) - Duration::minutes(1);
        let token = jwt.issue_at(7, issued).unwrap();
        assert!(jwt.validate(&token).is_err());
    }
}
