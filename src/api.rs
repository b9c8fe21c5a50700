//! HTTP client for the Nexora generation API.
//!
//! One endpoint per mode: `POST {base}/plan`, `POST {base}/blog`,
//! `POST {base}/research`. Each accepts a JSON object with a single
//! mode-specific string field and answers with a JSON object holding the
//! markdown result under the mode's result key, or an error object with a
//! human-readable `error` field.

use reqwest::Client;
use serde::Deserialize;

use crate::modes::Mode;

/// Base URL of the Nexora API.
pub const API_BASE_URL: &str = "http://localhost:5000/api";

/// Fallback message when a failure carries no structured error.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Error type for API client operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (connection, timeout, protocol).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Server answered with a non-success status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The response body did not contain a result for the requested mode.
    #[error("response missing result for mode `{0}`")]
    MissingResult(Mode),
}

impl ApiError {
    /// Collapse any failure into the single string shown to the user.
    ///
    /// A structured server message is used verbatim; every other failure
    /// falls back to the generic message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

/// Successful response payload. At most one of the three keys is present,
/// depending on which endpoint was called.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    pub plan: Option<String>,
    pub blog: Option<String>,
    pub research: Option<String>,
}

impl GenerateResponse {
    /// The markdown result for the given mode, if present.
    pub fn markdown_for(&self, mode: Mode) -> Option<&str> {
        match mode {
            Mode::Plan => self.plan.as_deref(),
            Mode::Blog => self.blog.as_deref(),
            Mode::Research => self.research.as_deref(),
        }
    }
}

/// Error body shape used by the API on failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the Nexora generation API.
#[derive(Debug, Clone)]
pub struct NexoraClient {
    /// Base URL for the API.
    pub base_url: String,
    /// Reusable HTTP client.
    client: Client,
}

impl NexoraClient {
    /// Create a client pointing at the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Submit `input` to the endpoint for `mode` and return the markdown
    /// result.
    ///
    /// The request body is `{payload_key: input}` where the payload key is
    /// `goal`, `topic`, or `query` depending on the mode.
    pub async fn generate(&self, mode: Mode, input: &str) -> Result<String, ApiError> {
        let spec = mode.spec();
        let url = format!("{}/{}", self.base_url, spec.id);
        let body = serde_json::json!({ spec.payload_key: input });

        tracing::debug!(%mode, %url, "dispatching generate request");

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            // Pull the structured message out of the error body when there
            // is one; otherwise the status text is all we have.
            let message = match response.json::<ErrorBody>().await {
                Ok(ErrorBody { error: Some(msg) }) => msg,
                _ => String::new(),
            };
            return Err(ApiError::Server { status, message });
        }

        let payload: GenerateResponse = response.json().await?;
        payload
            .markdown_for(mode)
            .map(str::to_string)
            .ok_or(ApiError::MissingResult(mode))
    }
}

impl Default for NexoraClient {
    fn default() -> Self {
        Self::new()
    }
}
