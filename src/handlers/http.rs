//! Application state and the health endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::auth::JwtSecret;
use crate::db::{DbPool, Store};

/// Shared application state: the dependency-injection root. Everything
/// handlers need hangs off this; there are no process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn new(store: Store, jwt_secret: JwtSecret) -> Self {
        Self { store, jwt_secret }
    }

    pub fn db(&self) -> &DbPool {
        self.store.pool()
    }

    pub fn jwt_secret(&self) -> &JwtSecret {
        &self.jwt_secret
    }
}

/// GET /health — liveness probe. Reports the advisory reachability flag
/// without touching the pool, so it stays fast even while the store is
/// down.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let database = if state.store.is_reachable() {
        "reachable"
    } else {
        "unreachable"
    };
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "coinops", "database": database })),
    )
}
