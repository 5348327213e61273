//! Entry point: load config, wire dependencies, and run the server.

use coinops::auth::JwtSecret;
use coinops::config::Config;
use coinops::db::{self, Store};
use coinops::{create_app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.jwt_secret_is_default {
        tracing::warn!(
            "JWT_SECRET not set; using the insecure built-in default. \
             Set JWT_SECRET before exposing this service."
        );
    }

    let db_pool = db::create_pool(&config.database_url).await?;
    let store = Store::new(db_pool);
    store.spawn_liveness_probe();

    let state = AppState::new(store, JwtSecret::new(config.jwt_secret.clone()));
    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
