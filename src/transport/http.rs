//! Shared HTTP client for the students-api.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Shared HTTP client bound to a fixed base URL.
///
/// Every response passes through one unwrapping step before callers see it:
/// the status is checked once, the envelope is discarded, and only the
/// decoded body is returned. Non-2xx statuses and network failures surface
/// as [`Error`] unchanged; there is no retry and no timeout logic of our
/// own, so reqwest's defaults apply.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport with reqwest's default client settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a transport around a caller-provided reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a GET request and return the decoded body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.url(path)).send().await?;
        unwrap_json(response).await
    }

    /// Send a POST request with a JSON body and return the decoded body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        unwrap_json(response).await
    }

    /// Send a PATCH request with a JSON body and return the decoded body.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        unwrap_json(response).await
    }

    /// Send a DELETE request and return the raw ack body.
    pub async fn delete(&self, path: &str) -> Result<serde_json::Value> {
        let response = self.client.delete(self.url(path)).send().await?;
        unwrap_ack(response).await
    }
}

/// Replace a full response with just its decoded body.
///
/// The single cross-cutting transform of this crate, applied at every verb
/// call site; the shared client itself carries no hooks.
async fn unwrap_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = check_status(response).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Like [`unwrap_json`] but tolerates an empty body (DELETE acks).
async fn unwrap_ack(response: reqwest::Response) -> Result<serde_json::Value> {
    let body = check_status(response).await?;
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

/// Read the body, surfacing non-2xx statuses as [`Error::Api`].
async fn check_status(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(body)
}
