//! Error types for todos-client.

use thiserror::Error;

/// The main error type for todos-client.
///
/// There is no retry or recovery layer: whatever the transport reports is
/// what the caller gets.
#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with a non-2xx status.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, as sent by the service.
        message: String,
    },

    /// Network-level failure (unreachable host, timeout); carries the
    /// underlying transport error unmodified.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response body did not decode into the expected type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status of the failed operation, when the service answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            Error::Json(_) => None,
        }
    }

    /// Returns true if the service reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Convenience type alias.
pub type Result<T> = std::result::Result<T, Error>;
