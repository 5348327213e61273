//! Health-checked store handle.
//!
//! Owns the pool plus an advisory reachability flag. The flag is updated
//! by a background liveness probe and read by `/health`; foreground
//! requests never consult it, so a stale flag can delay a health report
//! but never fail a real query.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::DbPool;

/// Interval between liveness probes. The free-tier database goes to
/// sleep after inactivity; probing also keeps it warm.
const PROBE_INTERVAL: Duration = Duration::from_secs(600);

#[derive(Clone)]
pub struct Store {
    pool: DbPool,
    reachable: Arc<AtomicBool>,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            reachable: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Advisory only: last known probe result.
    pub fn is_reachable(&self) -> bool {
        self.reachable.load(Ordering::Relaxed)
    }

    /// Spawn the periodic liveness probe. Failure only flips the flag and
    /// logs a warning; it never blocks or fails a foreground request.
    pub fn spawn_liveness_probe(&self) {
        let pool = self.pool.clone();
        let reachable = self.reachable.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(PROBE_INTERVAL);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match sqlx::query("SELECT 1").execute(&pool).await {
                    Ok(_) => {
                        if !reachable.swap(true, Ordering::Relaxed) {
                            tracing::info!("database reachable again");
                        }
                    }
                    Err(e) => {
                        reachable.store(false, Ordering::Relaxed);
                        tracing::warn!(error = %e, "database liveness probe failed");
                    }
                }
            }
        });
    }
}
