//! # todos-client
//!
//! Async Rust client for the mate.academy students-api todo resource.
//!
//! Four operations — list by owner, create, update, delete — issued through
//! one shared HTTP client. Responses are unwrapped before they reach the
//! caller: you get the decoded body, never the status/header envelope, and
//! failed operations reject with the transport error untouched.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use todos_client::{CreateTodo, TodosClient, UpdateTodo};
//!
//! #[tokio::main]
//! async fn main() -> todos_client::Result<()> {
//!     let client = TodosClient::new();
//!
//!     // List the default owner's todos
//!     let todos = client.list_todos().await?;
//!     println!("{} todos", todos.len());
//!
//!     // Create, complete, delete
//!     let created = client.create_todo(CreateTodo::new("Buy milk")).await?;
//!     let done = client
//!         .update_todo(created.id, UpdateTodo::new().completed(true))
//!         .await?;
//!     client.delete_todo(done.id).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

// Re-exports for ergonomic usage
pub use client::{TodosClient, TodosClientBuilder};
pub use error::{Error, Result};
pub use models::todo::{CreateTodo, Todo, UpdateTodo};
pub use transport::http::HttpTransport;
