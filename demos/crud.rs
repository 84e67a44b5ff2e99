//! CRUD example: create a todo, mark it done, then delete it.

use todos_client::{CreateTodo, Result, TodosClient, UpdateTodo};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("todos_client=debug")
        .init();

    let client = TodosClient::new();

    // Create under the default owner
    let todo = client
        .create_todo(CreateTodo::new("Write more Rust"))
        .await?;
    println!("created #{}: {}", todo.id, todo.title);

    // Mark it done
    let done = client
        .update_todo(todo.id, UpdateTodo::new().completed(true))
        .await?;
    println!("completed: {}", done.completed);

    // Clean up
    let ack = client.delete_todo(todo.id).await?;
    println!("deleted, server said: {}", ack);

    Ok(())
}
