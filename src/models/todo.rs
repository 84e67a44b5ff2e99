//! Todo DTOs and request payloads.
//!
//! The service speaks camelCase JSON (`userId`); field names are mapped via
//! serde container attributes. Caller-facing parameter structs are kept
//! separate from the resolved wire bodies so that defaults are applied in
//! exactly one place and a todo id can never leak into a PATCH body.

use serde::{Deserialize, Serialize};

/// A task record as stored by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned identifier, present once the todo exists remotely.
    pub id: u64,
    /// Task description.
    pub title: String,
    /// Owner the todo is grouped under. A plain foreign key; no
    /// authorization semantics are attached client-side.
    pub user_id: u64,
    /// Whether the task is done.
    pub completed: bool,
}

/// Parameters for creating a todo.
///
/// Only the title is required. The owner defaults to the client's configured
/// owner id and `completed` defaults to `false` when left unset.
#[derive(Debug, Clone)]
pub struct CreateTodo {
    /// Task description.
    pub title: String,
    /// Owner to assign the todo to; `None` uses the client default.
    pub user_id: Option<u64>,
    /// Initial completion state; `None` means not completed.
    pub completed: Option<bool>,
}

impl CreateTodo {
    /// Parameters for a todo with the given title and everything else unset.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            user_id: None,
            completed: None,
        }
    }

    /// Assign the todo to a specific owner instead of the client default.
    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the initial completion state.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Resolve unset fields into a concrete wire body.
    pub(crate) fn into_body(self, default_user_id: u64) -> CreateTodoBody {
        CreateTodoBody {
            title: self.title,
            user_id: self.user_id.unwrap_or(default_user_id),
            completed: self.completed.unwrap_or(false),
        }
    }
}

/// Resolved POST body; every field concrete, camelCase on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTodoBody {
    pub(crate) title: String,
    pub(crate) user_id: u64,
    pub(crate) completed: bool,
}

/// Partial-update payload for a todo.
///
/// Unset fields are omitted from the PATCH body entirely, leaving them
/// untouched on the server. The todo id travels in the URL path and never
/// appears in the body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTodo {
    /// New task description, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New completion state, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// An update with nothing set yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the task description.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Change the completion state.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}
