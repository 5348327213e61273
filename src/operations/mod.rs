//! Operation ledger: CRUD over a user's financial operations.

mod handlers;

pub use handlers::{create_operation, delete_operation, get_operation, list_operations, update_operation};
