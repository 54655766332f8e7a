//! User route handlers.
//!
//! Each handler performs one query and shapes the row set into the
//! response envelope. Zero matched rows on an id-scoped operation is
//! Not-Found, never an error.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};

use super::response::{db_error_response, error_response, success_response};
use super::types::UserBody;
use crate::config::AppState;
use crate::db;

/// `POST /users`
pub async fn create(
    req: Request<hyper::body::Incoming>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let body: UserBody = match super::read_json(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    match db::users::insert(&state.pool, body.name.as_deref(), body.email.as_deref()).await {
        Ok(user) => success_response(StatusCode::CREATED, "inserted successfully", &user),
        Err(e) => db_error_response(&e),
    }
}

/// `GET /users`
pub async fn list(state: &AppState) -> Response<Full<Bytes>> {
    match db::users::list(&state.pool).await {
        Ok(users) => success_response(StatusCode::OK, "users retrieved successfully", &users),
        Err(e) => db_error_response(&e),
    }
}

/// `GET /users/:id`
pub async fn get(raw_id: &str, state: &AppState) -> Response<Full<Bytes>> {
    let id = match parse_id(raw_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match db::users::find(&state.pool, id).await {
        Ok(Some(user)) => success_response(
            StatusCode::OK,
            &format!("user with id: {id} is retrieved successfully"),
            &user,
        ),
        Ok(None) => not_found(id),
        Err(e) => db_error_response(&e),
    }
}

/// `PUT /users/:id`
pub async fn update(
    raw_id: &str,
    req: Request<hyper::body::Incoming>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let id = match parse_id(raw_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let body: UserBody = match super::read_json(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    match db::users::update(&state.pool, id, body.name.as_deref(), body.email.as_deref()).await {
        Ok(Some(user)) => success_response(
            StatusCode::OK,
            &format!("user with id: {id} is updated successfully"),
            &user,
        ),
        Ok(None) => not_found(id),
        Err(e) => db_error_response(&e),
    }
}

/// `DELETE /users/:id`
///
/// A successful delete answers 201 with a null data field. Unconventional,
/// but it is the published contract of this endpoint.
pub async fn delete(raw_id: &str, state: &AppState) -> Response<Full<Bytes>> {
    let id = match parse_id(raw_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match db::users::delete(&state.pool, id).await {
        Ok(0) => not_found(id),
        Ok(_) => success_response(
            StatusCode::CREATED,
            &format!("user with id: {id} is deleted successfully"),
            serde_json::Value::Null,
        ),
        Err(e) => db_error_response(&e),
    }
}

fn not_found(id: i32) -> Response<Full<Bytes>> {
    error_response(
        StatusCode::NOT_FOUND,
        &format!("user with id: {id} is not found"),
    )
}

/// Parse the id path segment.
///
/// The route matcher captures the segment verbatim; a non-numeric id is
/// rejected here with the same message shape the database would use.
fn parse_id(raw: &str) -> Result<i32, Response<Full<Bytes>>> {
    raw.parse::<i32>().map_err(|_| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("invalid input syntax for type integer: \"{raw}\""),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_numeric() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_non_numeric_is_a_500() {
        let resp = parse_id("abc").unwrap_err();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_is_a_404_with_the_id() {
        let resp = not_found(9);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
