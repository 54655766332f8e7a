// Data access module entry point
// Owns pool construction, schema bootstrap, and the per-table queries

pub mod pool;
pub mod schema;
pub mod todos;
pub mod users;

pub use pool::create_pool;
pub use schema::init_database;
