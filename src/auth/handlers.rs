//! Auth HTTP handlers: register, login, current user.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::PasswordService;
use crate::db::{user_create, user_find_by_email, user_get_by_id};
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::AuthUser;
use crate::models::UserInfo;

const BAD_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    if body.username.trim().is_empty() {
        return Err(AppError::InvalidInput("Username is required".to_string()));
    }
    if body.email.trim().is_empty() {
        return Err(AppError::InvalidInput("Email is required".to_string()));
    }
    PasswordService::validate_email(&body.email)?;
    PasswordService::validate_password(&body.password)?;

    if user_find_by_email(state.db(), &body.email).await?.is_some() {
        return Err(AppError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    // Plaintext is dropped right after hashing; only the hash is stored.
    let password_hash = PasswordService::hash_password(&body.password)?;
    let user = user_create(
        state.db(),
        body.username.trim(),
        body.email.trim(),
        &password_hash,
    )
    .await?;
    let token = state.jwt_secret().issue(user.user_id)?;

    tracing::info!(user_id = user.user_id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.into(),
            token,
        }),
    ))
}

/// POST /auth/login
///
/// Unknown email and wrong password produce the same response, so a
/// caller cannot probe which one was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::InvalidInput(
            "Email and password are required".to_string(),
        ));
    }

    let user = user_find_by_email(state.db(), &body.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

    if !PasswordService::verify_password(&body.password, &user.password_hash)? {
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
    }

    let token = state.jwt_secret().issue(user.user_id)?;

    Ok(Json(AuthResponse {
        user: user.into(),
        token,
    }))
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: UserInfo,
}

/// GET /auth/user
pub async fn current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<CurrentUserResponse>, AppError> {
    let user = user_get_by_id(state.db(), user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(CurrentUserResponse { user: user.into() }))
}
