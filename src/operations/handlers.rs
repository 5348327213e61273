//! Operations HTTP handlers. Every query is scoped by the caller's
//! resolved user id, so foreign-owned rows always read as missing.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::{
    operation_create, operation_delete_owned, operation_get_owned, operation_update_owned,
    operations_list_by_owner,
};
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::AuthUser;
use crate::models::{Operation, OperationChanges, OperationSummary};

const DEFAULT_STATUS: &str = "pending";
const NOT_FOUND: &str = "Operation not found";

#[derive(Debug, Deserialize)]
pub struct CreateOperationRequest {
    #[serde(default)]
    pub operation_type: String,
    #[serde(default)]
    pub crypto_currency: String,
    pub crypto_amount: Option<Decimal>,
    pub fiat_currency: Option<String>,
    pub fiat_amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub wallet_address: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OperationResponse {
    pub operation: Operation,
}

/// POST /operations
pub async fn create_operation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateOperationRequest>,
) -> Result<(StatusCode, Json<OperationResponse>), AppError> {
    let crypto_amount = match body.crypto_amount {
        Some(amount) if !body.operation_type.trim().is_empty()
            && !body.crypto_currency.trim().is_empty() => amount,
        _ => {
            return Err(AppError::InvalidInput(
                "Operation type, crypto currency and amount are required".to_string(),
            ))
        }
    };

    let status = body.status.as_deref().unwrap_or(DEFAULT_STATUS);
    let row = operation_create(
        state.db(),
        user_id,
        body.operation_type.trim(),
        body.crypto_currency.trim(),
        crypto_amount,
        body.fiat_currency.as_deref(),
        body.fiat_amount,
        body.payment_method.as_deref(),
        body.wallet_address.as_deref(),
        status,
    )
    .await?;

    tracing::info!(user_id, operation_id = row.operation_id, "operation created");
    Ok((
        StatusCode::CREATED,
        Json(OperationResponse {
            operation: row.into(),
        }),
    ))
}

#[derive(Debug, Serialize)]
pub struct ListOperationsResponse {
    pub count: usize,
    pub operations: Vec<Operation>,
    pub summary: OperationSummary,
}

/// GET /operations — newest first, with per-type and per-status counts.
pub async fn list_operations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ListOperationsResponse>, AppError> {
    let rows = operations_list_by_owner(state.db(), user_id).await?;
    let summary = OperationSummary::from_rows(&rows);
    Ok(Json(ListOperationsResponse {
        count: rows.len(),
        operations: rows.into_iter().map(Into::into).collect(),
        summary,
    }))
}

/// GET /operations/:id
pub async fn get_operation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<OperationResponse>, AppError> {
    let row = operation_get_owned(state.db(), id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(Json(OperationResponse {
        operation: row.into(),
    }))
}

/// PUT /operations/:id — partial update over the enumerated field set.
pub async fn update_operation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(changes): Json<OperationChanges>,
) -> Result<Json<OperationResponse>, AppError> {
    if changes.is_empty() {
        return Err(AppError::InvalidInput(
            "No updatable fields provided".to_string(),
        ));
    }
    let row = operation_update_owned(state.db(), id, user_id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    tracing::info!(user_id, operation_id = id, "operation updated");
    Ok(Json(OperationResponse {
        operation: row.into(),
    }))
}

/// DELETE /operations/:id — responds with the deleted row's last state.
pub async fn delete_operation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<OperationResponse>, AppError> {
    let row = operation_delete_owned(state.db(), id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    tracing::info!(user_id, operation_id = id, "operation deleted");
    Ok(Json(OperationResponse {
        operation: row.into(),
    }))
}
