//! HTTP client for the memories API.

pub mod items;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Error body returned by the server on every rejected call.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    message: String,
}

/// HTTP client for the memories API.
#[derive(Debug, Clone)]
pub struct MemoriesClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl MemoriesClient {
    /// Create a new client with the given base URL and bearer token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start an authenticated request.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.url(path))
            .bearer_auth(&self.token)
    }

    /// Decode a success body, or turn the server's error body into a
    /// [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "response received");
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(error_from_body(status.as_u16(), &text))
    }
}

/// Map a rejected response to an error, preferring the structured body.
fn error_from_body(status: u16, text: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(body) if status == 404 => ClientError::NotFound(body.message),
        Ok(body) => ClientError::Api {
            status,
            kind: body.error,
            message: body.message,
        },
        Err(_) => ClientError::ServerError {
            status,
            message: text.to_string(),
        },
    }
}
