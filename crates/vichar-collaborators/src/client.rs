//! Shared HTTP client for the backend collaborator endpoints.

use crate::config::BackendConfig;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use vichar_core::error::{Result, VicharError};

/// Thin wrapper over `reqwest::Client` that knows the backend base URL,
/// attaches authentication, and maps HTTP failures onto
/// `VicharError::Collaborator` with a retryable classification.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl BackendClient {
    /// Creates a client from backend configuration.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Config` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VicharError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// POSTs a JSON body to `path` and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// - `VicharError::Collaborator` with `retryable=true` for connect and
    ///   timeout failures and for 429/5xx statuses
    /// - `VicharError::Collaborator` with `retryable=false` for other
    ///   non-success statuses
    /// - `VicharError::Serialization` if the response body cannot be parsed
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "Sending backend request");

        let mut request = self.client.post(&url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|err| {
            if err.is_connect() || err.is_timeout() {
                VicharError::collaborator_retryable(format!("Backend request failed: {}", err))
            } else {
                VicharError::collaborator(format!("Backend request failed: {}", err))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: R = response.json().await.map_err(|err| {
            VicharError::Serialization {
                format: "JSON".to_string(),
                message: format!("Failed to parse backend response: {}", err),
            }
        })?;

        Ok(parsed)
    }
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn map_http_error(status: StatusCode, body: String, retry_after_secs: Option<u64>) -> VicharError {
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.error.or(parsed.message))
        .unwrap_or(body);

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    VicharError::Collaborator {
        message: format!("Backend returned {}: {}", status.as_u16(), message),
        retryable: is_retryable,
        retry_after_secs,
    }
}

fn parse_retry_after(header: Option<&reqwest::header::HeaderValue>) -> Option<u64> {
    // Retry-After HTTP-date form is ignored; only delay-seconds is honored
    header?.to_str().ok()?.parse::<u64>().ok()
}
