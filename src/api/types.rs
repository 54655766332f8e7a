// API request body types

use serde::Deserialize;

/// Body for `POST /users` and `PUT /users/:id`.
///
/// Fields are optional on purpose: an absent value binds SQL NULL and the
/// database's NOT NULL constraints produce the error response.
#[derive(Debug, Default, Deserialize)]
pub struct UserBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body for `POST /todos`.
#[derive(Debug, Default, Deserialize)]
pub struct TodoBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user_id: Option<i32>,
}
