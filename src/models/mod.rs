//! Domain models: public views, partial updates, summaries.

mod operation;
mod user;

pub use operation::{Operation, OperationChanges, OperationSummary};
pub use user::UserInfo;
