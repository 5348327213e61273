//! Repositories: users and operations.
//!
//! Every operations query is scoped by both the row id and the owning
//! user id, so a foreign-owned row is indistinguishable from a missing
//! one at this layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::error::AppResult;
use crate::models::OperationChanges;

use super::DbPool;

// ---- Users ----

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

pub async fn user_create(
    pool: &DbPool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> AppResult<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (username, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING user_id, username, email, password_hash, created_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn user_find_by_email(pool: &DbPool, email: &str) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT user_id, username, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn user_get_by_id(pool: &DbPool, user_id: i64) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT user_id, username, email, password_hash, created_at FROM users WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

// ---- Operations ----

const OPERATION_COLUMNS: &str = "operation_id, user_id, operation_type, crypto_currency, \
     crypto_amount, fiat_currency, fiat_amount, payment_method, wallet_address, status, \
     created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct OperationRow {
    pub operation_id: i64,
    pub user_id: i64,
    pub operation_type: String,
    pub crypto_currency: Option<String>,
    pub crypto_amount: Option<Decimal>,
    pub fiat_currency: Option<String>,
    pub fiat_amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub wallet_address: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[allow(clippy::too_many_arguments)]
pub async fn operation_create(
    pool: &DbPool,
    user_id: i64,
    operation_type: &str,
    crypto_currency: &str,
    crypto_amount: Decimal,
    fiat_currency: Option<&str>,
    fiat_amount: Option<Decimal>,
    payment_method: Option<&str>,
    wallet_address: Option<&str>,
    status: &str,
) -> AppResult<OperationRow> {
    let sql = format!(
        r#"
        INSERT INTO operations (
            user_id, operation_type, crypto_currency, crypto_amount,
            fiat_currency, fiat_amount, payment_method, wallet_address, status
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {OPERATION_COLUMNS}
        "#
    );
    let row = sqlx::query_as::<_, OperationRow>(&sql)
        .bind(user_id)
        .bind(operation_type)
        .bind(crypto_currency)
        .bind(crypto_amount)
        .bind(fiat_currency)
        .bind(fiat_amount)
        .bind(payment_method)
        .bind(wallet_address)
        .bind(status)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// All operations owned by `user_id`, newest created first.
pub async fn operations_list_by_owner(pool: &DbPool, user_id: i64) -> AppResult<Vec<OperationRow>> {
    let sql = format!(
        "SELECT {OPERATION_COLUMNS} FROM operations WHERE user_id = $1 ORDER BY created_at DESC"
    );
    let rows = sqlx::query_as::<_, OperationRow>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn operation_get_owned(
    pool: &DbPool,
    operation_id: i64,
    user_id: i64,
) -> AppResult<Option<OperationRow>> {
    let sql = format!(
        "SELECT {OPERATION_COLUMNS} FROM operations WHERE operation_id = $1 AND user_id = $2"
    );
    let row = sqlx::query_as::<_, OperationRow>(&sql)
        .bind(operation_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Apply a partial update. The statement is static SQL over the fixed set
/// of mutable columns; absent fields keep their current value via
/// COALESCE. `updated_at` is re-stamped unconditionally.
pub async fn operation_update_owned(
    pool: &DbPool,
    operation_id: i64,
    user_id: i64,
    changes: &OperationChanges,
) -> AppResult<Option<OperationRow>> {
    let sql = format!(
        r#"
        UPDATE operations SET
            operation_type  = COALESCE($3, operation_type),
            crypto_currency = COALESCE($4, crypto_currency),
            crypto_amount   = COALESCE($5, crypto_amount),
            fiat_currency   = COALESCE($6, fiat_currency),
            fiat_amount     = COALESCE($7, fiat_amount),
            payment_method  = COALESCE($8, payment_method),
            wallet_address  = COALESCE($9, wallet_address),
            status          = COALESCE($10, status),
            updated_at      = NOW()
        WHERE operation_id = $1 AND user_id = $2
        RETURNING {OPERATION_COLUMNS}
        "#
    );
    let row = sqlx::query_as::<_, OperationRow>(&sql)
        .bind(operation_id)
        .bind(user_id)
        .bind(changes.operation_type.as_deref())
        .bind(changes.crypto_currency.as_deref())
        .bind(changes.crypto_amount)
        .bind(changes.fiat_currency.as_deref())
        .bind(changes.fiat_amount)
        .bind(changes.payment_method.as_deref())
        .bind(changes.wallet_address.as_deref())
        .bind(changes.status.as_deref())
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Delete an owned operation, returning its last state.
pub async fn operation_delete_owned(
    pool: &DbPool,
    operation_id: i64,
    user_id: i64,
) -> AppResult<Option<OperationRow>> {
    let sql = format!(
        "DELETE FROM operations WHERE operation_id = $1 AND user_id = $2 RETURNING {OPERATION_COLUMNS}"
    );
    let row = sqlx::query_as::<_, OperationRow>(&sql)
        .bind(operation_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}
