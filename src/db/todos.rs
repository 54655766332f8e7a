//! Todo queries.

use sqlx::PgPool;

use crate::models::Todo;

const INSERT: &str = "INSERT INTO todos(title, user_id) VALUES($1, $2) RETURNING *";
const LIST: &str = "SELECT * FROM todos";

/// Insert a todo and return the created row.
///
/// A `user_id` that references no user fails on the foreign key; a missing
/// title fails on NOT NULL. Both surface as query errors.
pub async fn insert(
    pool: &PgPool,
    title: Option<&str>,
    user_id: Option<i32>,
) -> Result<Todo, sqlx::Error> {
    sqlx::query_as(INSERT)
        .bind(title)
        .bind(user_id)
        .fetch_one(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as(LIST).fetch_all(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_are_parameterized() {
        assert!(INSERT.contains("$1") && INSERT.contains("$2"));
        assert!(INSERT.contains("RETURNING *"));
    }
}
