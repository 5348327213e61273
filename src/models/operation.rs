//! Operation view, partial-update changeset, and list summary.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::OperationRow;

/// API view of an operation row.
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
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
    pub created_at: String,
    pub updated_at: String,
}

impl From<OperationRow> for Operation {
    fn from(row: OperationRow) -> Self {
        Self {
            operation_id: row.operation_id,
            user_id: row.user_id,
            operation_type: row.operation_type,
            crypto_currency: row.crypto_currency,
            crypto_amount: row.crypto_amount,
            fiat_currency: row.fiat_currency,
            fiat_amount: row.fiat_amount,
            payment_method: row.payment_method,
            wallet_address: row.wallet_address,
            status: row.status,
            created_at: row.created_at.to_rfc3339(),
            updated_at: row.updated_at.to_rfc3339(),
        }
    }
}

/// Enumerated set of updatable fields for PUT /operations/:id.
///
/// This is the full allow-list: the key columns and timestamps are not
/// representable here, so a client cannot touch them. Unknown JSON keys
/// are rejected rather than silently dropped.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationChanges {
    pub operation_type: Option<String>,
    pub crypto_currency: Option<String>,
    pub crypto_amount: Option<Decimal>,
    pub fiat_currency: Option<String>,
    pub fiat_amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub wallet_address: Option<String>,
    pub status: Option<String>,
}

impl OperationChanges {
    pub fn is_empty(&self) -> bool {
        self.operation_type.is_none()
            && self.crypto_currency.is_none()
            && self.crypto_amount.is_none()
            && self.fiat_currency.is_none()
            && self.fiat_amount.is_none()
            && self.payment_method.is_none()
            && self.wallet_address.is_none()
            && self.status.is_none()
    }
}

/// Aggregate view over a user's operations, computed from the listed
/// rows rather than stored separately.
#[derive(Debug, Serialize)]
pub struct OperationSummary {
    pub total_operations: usize,
    pub by_type: BTreeMap<String, u64>,
    pub by_status: BTreeMap<String, u64>,
}

impl OperationSummary {
    pub fn from_rows(rows: &[OperationRow]) -> Self {
        let mut by_type: BTreeMap<String, u64> = BTreeMap::new();
        let mut by_status: BTreeMap<String, u64> = BTreeMap::new();
        for row in rows {
            *by_type.entry(row.operation_type.clone()).or_default() += 1;
            *by_status.entry(row.status.clone()).or_default() += 1;
        }
        Self {
            total_operations: rows.len(),
            by_type,
            by_status,
        }
    }
}
