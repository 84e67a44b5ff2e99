//! Basic usage example: list the default owner's todos and print them.

use todos_client::{Result, TodosClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("todos_client=debug")
        .init();

    // Build client against the production students-api
    let client = TodosClient::new();

    let todos = client.list_todos().await?;
    println!("{} todos for user {}", todos.len(), client.default_user_id());
    for todo in &todos {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{}] {} (#{})", mark, todo.title, todo.id);
    }

    Ok(())
}
