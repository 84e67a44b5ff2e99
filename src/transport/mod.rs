//! HTTP transport layer.

pub mod http;
