//! Crypto-exchange operations backend.
//!
//! REST API for user registration/login and an authenticated ledger of
//! financial operations (deposits, withdrawals, exchanges), backed by
//! PostgreSQL.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod operations;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::http::AppState;

use axum::routing::{get, post};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router (auth, operations, health). Used by main and by
/// integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/user", get(auth::current_user));

    let operation_routes = axum::Router::new()
        .route(
            "/",
            post(operations::create_operation).get(operations::list_operations),
        )
        .route(
            "/:id",
            get(operations::get_operation)
                .put(operations::update_operation)
                .delete(operations::delete_operation),
        );

    axum::Router::new()
        .route("/health", get(handlers::health))
        .nest("/auth", auth_routes)
        .nest("/operations", operation_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
