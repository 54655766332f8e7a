//! Route matching module
//!
//! Maps method + path to a route. Matching is exact on path segments; the
//! id segment is captured verbatim and left for the handler to interpret.

use hyper::Method;

/// The routes the server dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Hello,
    CreateUser,
    ListUsers,
    GetUser(&'a str),
    UpdateUser(&'a str),
    DeleteUser(&'a str),
    CreateTodo,
    ListTodos,
    NotFound,
}

/// Match a request to its route.
pub fn match_route<'a>(method: &Method, path: &'a str) -> Route<'a> {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        (&Method::GET, [""]) => Route::Hello,
        (&Method::POST, ["users"]) => Route::CreateUser,
        (&Method::GET, ["users"]) => Route::ListUsers,
        (&Method::GET, ["users", id]) if !id.is_empty() => Route::GetUser(*id),
        (&Method::PUT, ["users", id]) if !id.is_empty() => Route::UpdateUser(*id),
        (&Method::DELETE, ["users", id]) if !id.is_empty() => Route::DeleteUser(*id),
        (&Method::POST, ["todos"]) => Route::CreateTodo,
        (&Method::GET, ["todos"]) => Route::ListTodos,
        _ => Route::NotFound,
    }
}
