//! User record as stored in the `users` table.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row.
///
/// Only `name` and `email` are written through the API; the remaining
/// profile columns stay NULL until a future endpoint fills them. The
/// timestamps are assigned by the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
