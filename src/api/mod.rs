// API module entry
// Request logging, routing, and dispatch to the resource handlers

mod response;
mod routes;
mod todos;
mod types;
mod users;

pub use routes::{match_route, Route};

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger::{self, RequestLogEntry};

/// Main entry point for HTTP request handling
///
/// Appends one request log line before dispatch, success or not, then
/// routes on method + path. Any unmatched combination falls through to the
/// catch-all 404.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    logger::log_request(&RequestLogEntry::new(
        method.to_string(),
        remote_addr.ip().to_string(),
        path.clone(),
    ));

    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    let response = match match_route(&method, &path) {
        Route::Hello => hello_response(),
        Route::CreateUser => users::create(req, &state).await,
        Route::ListUsers => users::list(&state).await,
        Route::GetUser(id) => users::get(id, &state).await,
        Route::UpdateUser(id) => users::update(id, req, &state).await,
        Route::DeleteUser(id) => users::delete(id, &state).await,
        Route::CreateTodo => todos::create(req, &state).await,
        Route::ListTodos => todos::list(&state).await,
        Route::NotFound => response::route_not_found(&path),
    };

    Ok(response)
}

/// `GET /` greeting.
fn hello_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from("Hello trying!")))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build greeting response: {e}"));
            Response::new(Full::new(Bytes::from("Hello trying!")))
        })
}

/// Validate Content-Length header against the configured limit
/// Returns Some(413 response) if too large, None otherwise
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(response::payload_too_large())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Collect the request body and parse it as JSON.
///
/// An empty body deserializes to the type's default, so absent fields flow
/// to the database as NULL instead of failing at the parse step.
pub(crate) async fn read_json<T: DeserializeOwned + Default>(
    req: Request<hyper::body::Incoming>,
) -> Result<T, Response<Full<Bytes>>> {
    let whole_body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Err(response::bad_request("Failed to read request body")),
    };

    if whole_body.is_empty() {
        return Ok(T::default());
    }

    serde_json::from_slice(&whole_body)
        .map_err(|e| response::bad_request(&format!("Invalid JSON: {e}")))
}
