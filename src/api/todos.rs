//! Todo resource operations.
//!
//! Thin wrappers that build resource-relative paths and delegate to the
//! shared transport; results arrive already unwrapped to their bodies.
//! Malformed input is forwarded as-is and any rejection comes back from
//! the service, not from here.

use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::models::todo::{CreateTodo, Todo, UpdateTodo};
use crate::transport::http::HttpTransport;

/// Fetch all todos belonging to one owner.
pub async fn list_user_todos(http: &HttpTransport, user_id: u64) -> Result<Vec<Todo>> {
    let path = config::user_todos_path(user_id);
    debug!(user_id, "listing todos");

    let todos: Vec<Todo> = http.get(&path).await?;
    debug!(count = todos.len(), "todos fetched");
    Ok(todos)
}

/// Create a todo, resolving an unset owner to `default_user_id` and an
/// unset completion state to `false`. The server assigns the id.
pub async fn create_todo(
    http: &HttpTransport,
    params: CreateTodo,
    default_user_id: u64,
) -> Result<Todo> {
    let body = params.into_body(default_user_id);
    debug!(user_id = body.user_id, title = body.title.as_str(), "creating todo");

    http.post(config::TODOS_PATH, &body).await
}

/// Apply a partial update to the todo with the given id.
pub async fn update_todo(http: &HttpTransport, todo_id: u64, update: UpdateTodo) -> Result<Todo> {
    let path = config::todo_path(todo_id);
    debug!(todo_id, "updating todo");

    http.patch(&path, &update).await
}

/// Delete the todo with the given id, returning the service's ack body.
pub async fn delete_todo(http: &HttpTransport, todo_id: u64) -> Result<serde_json::Value> {
    let path = config::todo_path(todo_id);
    debug!(todo_id, "deleting todo");

    http.delete(&path).await
}
