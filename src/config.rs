//! Configuration constants and URL paths for the students-api todo resource.

/// Default API endpoint the shared client is pointed at.
pub const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";

/// Owner id used when an operation is not given an explicit one.
///
/// This is demo data baked into the upstream service rather than anything
/// meaningful; override it per client with
/// [`TodosClientBuilder::default_user_id`](crate::TodosClientBuilder::default_user_id).
pub const DEFAULT_USER_ID: u64 = 4110;

/// Collection path for the todo resource.
pub const TODOS_PATH: &str = "/todos";

/// Returns the collection path filtered to a single owner's todos.
pub fn user_todos_path(user_id: u64) -> String {
    format!("{}?userId={}", TODOS_PATH, user_id)
}

/// Returns the item path for a single todo.
pub fn todo_path(todo_id: u64) -> String {
    format!("{}/{}", TODOS_PATH, todo_id)
}
