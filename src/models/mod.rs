//! Data models for the todo resource.

pub mod todo;
