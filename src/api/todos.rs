//! Todo route handlers.
//!
//! Todos expose create and list only; per-id operations live on the user
//! resource.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};

use super::response::{db_error_response, success_response};
use super::types::TodoBody;
use crate::config::AppState;
use crate::db;

/// `POST /todos`
pub async fn create(
    req: Request<hyper::body::Incoming>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let body: TodoBody = match super::read_json(req).await {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    match db::todos::insert(&state.pool, body.title.as_deref(), body.user_id).await {
        Ok(todo) => success_response(StatusCode::CREATED, "todo created successfully", &todo),
        Err(e) => db_error_response(&e),
    }
}

/// `GET /todos`
pub async fn list(state: &AppState) -> Response<Full<Bytes>> {
    match db::todos::list(&state.pool).await {
        Ok(todos) => success_response(StatusCode::OK, "todos retrieved successfully", &todos),
        Err(e) => db_error_response(&e),
    }
}
