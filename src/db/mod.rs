//! Database layer: pool, health-checked store handle, and repositories
//! for PostgreSQL.

mod pool;
mod repositories;
mod store;

pub use pool::{create_pool, DbPool};
pub use repositories::*;
pub use store::Store;
