//! User queries.
//!
//! Every statement binds positional placeholders; request input never
//! reaches the SQL text.

use sqlx::PgPool;

use crate::models::User;

const INSERT: &str = "INSERT INTO users(name, email) VALUES($1, $2) RETURNING *";
const LIST: &str = "SELECT * FROM users";
const FIND: &str = "SELECT * FROM users WHERE id = $1";
const UPDATE: &str = "UPDATE users SET name=$1, email=$2 WHERE id=$3 RETURNING *";
const DELETE: &str = "DELETE FROM users WHERE id = $1";

/// Insert a user and return the created row.
///
/// `name` and `email` bind NULL when absent so the NOT NULL constraints
/// raise the error; validation stays with the database.
pub async fn insert(
    pool: &PgPool,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as(INSERT)
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as(LIST).fetch_all(pool).await
}

pub async fn find(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(FIND).bind(id).fetch_optional(pool).await
}

/// Update name and email, returning `None` when no row matched the id.
pub async fn update(
    pool: &PgPool,
    id: i32,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(UPDATE)
        .bind(name)
        .bind(email)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Delete by id, returning the number of rows removed.
///
/// Owned todos go with the user through the cascade on the foreign key.
pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(DELETE).bind(id).execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_are_parameterized() {
        assert!(INSERT.contains("$1") && INSERT.contains("$2"));
        assert!(FIND.contains("$1"));
        assert!(UPDATE.contains("$1") && UPDATE.contains("$2") && UPDATE.contains("$3"));
        assert!(DELETE.contains("$1"));
    }

    #[test]
    fn test_mutations_return_the_row() {
        assert!(INSERT.contains("RETURNING *"));
        assert!(UPDATE.contains("RETURNING *"));
    }
}
