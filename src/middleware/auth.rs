//! Auth gateway: bearer-token extractor for protected routes.
//!
//! The original web client sends its token in an `x-auth-token` header;
//! that stays the primary scheme for compatibility. A standard
//! `Authorization: Bearer <token>` header is accepted as well.

use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};

use crate::error::AppError;
use crate::handlers::http::AppState;

const HEADER_AUTH_TOKEN: &str = "x-auth-token";
const BEARER_PREFIX: &str = "Bearer ";

/// Extractor: authenticated user ID from a validated token. Rejection
/// short-circuits before the handler body runs.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub i64);

#[axum::async_trait]
impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("No token, authorization denied".to_string()))?;
        let user_id = state.jwt_secret().validate(token)?;
        Ok(AuthUser(user_id))
    }
}

fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers.get(HEADER_AUTH_TOKEN).and_then(|v| v.to_str().ok()) {
        if !token.is_empty() {
            return Some(token);
        }
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn prefers_x_auth_token_header() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_AUTH_TOKEN, HeaderValue::from_static("abc"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer other"));
        assert_eq!(extract_token(&headers), Some("abc"));
    }

    #[test]
    fn falls_back_to_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(extract_token(&headers), Some("abc"));
    }

    #[test]
    fn missing_or_malformed_yields_none() {
        assert_eq!(extract_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(extract_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(HEADER_AUTH_TOKEN, HeaderValue::from_static(""));
        assert_eq!(extract_token(&headers), None);
    }
}
