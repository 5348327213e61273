//! Public user view. The password hash never leaves the db layer.

use serde::Serialize;

use crate::db::UserRow;

#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl From<UserRow> for UserInfo {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            username: row.username,
            email: row.email,
            created_at: row.created_at.to_rfc3339(),
        }
    }
}
