//! Todo record as stored in the `todos` table.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full todo row.
///
/// `user_id` is nullable; when present it references an existing user and
/// the row is cascade-deleted with its owner.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub user_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
