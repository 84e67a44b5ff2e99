//! Main client entry point.

use std::sync::Arc;

use tracing::info;

use crate::api;
use crate::config::{DEFAULT_BASE_URL, DEFAULT_USER_ID};
use crate::error::Result;
use crate::models::todo::{CreateTodo, Todo, UpdateTodo};
use crate::transport::http::HttpTransport;

/// students-api todo client.
///
/// Cheap to clone; every clone shares the same underlying HTTP client.
/// All state is immutable configuration, so a single client can serve any
/// number of concurrent tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use todos_client::{CreateTodo, TodosClient};
///
/// # async fn example() -> todos_client::Result<()> {
/// let client = TodosClient::new();
///
/// let todos = client.list_todos().await?;
/// let created = client.create_todo(CreateTodo::new("Buy milk")).await?;
/// println!("created #{}", created.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TodosClient {
    http: Arc<HttpTransport>,
    default_user_id: u64,
}

impl TodosClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> TodosClientBuilder {
        TodosClientBuilder::new()
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// The owner id used when operations are not given an explicit one.
    pub fn default_user_id(&self) -> u64 {
        self.default_user_id
    }

    /// List the default owner's todos.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        api::todos::list_user_todos(&self.http, self.default_user_id).await
    }

    /// List the todos of a specific owner.
    pub async fn list_todos_for(&self, user_id: u64) -> Result<Vec<Todo>> {
        api::todos::list_user_todos(&self.http, user_id).await
    }

    /// Create a todo and return it with its server-assigned id.
    pub async fn create_todo(&self, params: CreateTodo) -> Result<Todo> {
        api::todos::create_todo(&self.http, params, self.default_user_id).await
    }

    /// Patch the todo with the given id; unset fields are left untouched.
    pub async fn update_todo(&self, todo_id: u64, update: UpdateTodo) -> Result<Todo> {
        api::todos::update_todo(&self.http, todo_id, update).await
    }

    /// Delete the todo with the given id and return the service's ack body.
    pub async fn delete_todo(&self, todo_id: u64) -> Result<serde_json::Value> {
        api::todos::delete_todo(&self.http, todo_id).await
    }
}

impl Default for TodosClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`TodosClient`].
pub struct TodosClientBuilder {
    base_url: Option<String>,
    default_user_id: Option<u64>,
    reqwest_client: Option<reqwest::Client>,
}

impl TodosClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_user_id: None,
            reqwest_client: None,
        }
    }

    /// Point the client at a different endpoint (useful for tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the owner id operations fall back to when none is given.
    pub fn default_user_id(mut self, user_id: u64) -> Self {
        self.default_user_id = Some(user_id);
        self
    }

    /// Use a custom reqwest client (timeouts, proxies, etc.).
    pub fn reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.reqwest_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> TodosClient {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let http = match self.reqwest_client {
            Some(client) => HttpTransport::with_client(client, base_url),
            None => HttpTransport::new(base_url),
        };

        info!(base_url = http.base_url(), "TodosClient initialized");
        TodosClient {
            http: Arc::new(http),
            default_user_id: self.default_user_id.unwrap_or(DEFAULT_USER_ID),
        }
    }
}

impl Default for TodosClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
