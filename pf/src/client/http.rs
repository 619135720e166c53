//! reqwest-backed transport
//!
//! Sends authenticated GET requests to the prompt service and retries
//! transient failures with exponential backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::is_retryable_status;
use super::{ApiRequest, ClientError, Transport};
use crate::config::ApiConfig;

/// Reported to the service alongside every request
const SDK_TYPE: &str = "rust";
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Used when a 429 carries no usable `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// HTTP transport for the prompt service
pub struct HttpTransport {
    base_url: Url,
    api_key: String,
    http: Client,
    max_retries: u32,
    initial_backoff: Duration,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport from configuration, reading the API key from the environment
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        debug!(base_url = %config.base_url, "HttpTransport::from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Self::new(config, api_key)
    }

    /// Create a transport with an explicit API key
    pub fn new(config: &ApiConfig, api_key: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("Invalid base-url '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "Invalid base-url '{}': cannot hold a path",
                config.base_url
            )));
        }

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(ClientError::Network)?;

        Ok(Self {
            base_url,
            api_key: api_key.into(),
            http,
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            timeout,
        })
    }

    /// Append the request's segments to the base URL, percent-encoding each
    fn url_for(&self, request: &ApiRequest) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("Invalid base-url '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

/// Prefer a `message` or `error` string from a JSON error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"]
                .iter()
                .find_map(|key| v.get(key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        let url = self.url_for(request)?;
        debug!(%url, query = ?request.query, "get_json: called");

        let mut last_error = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let backoff = self.backoff(attempt);
                warn!(
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    path = %request.path(),
                    "get_json: retrying after transient error"
                );
                tokio::time::sleep(backoff).await;
            }

            let response = match self
                .http
                .get(url.clone())
                .bearer_auth(&self.api_key)
                .header(ACCEPT, "application/json")
                .header("X-Sdk-Type", SDK_TYPE)
                .header("X-Sdk-Version", SDK_VERSION)
                .query(&request.query)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    let err = if e.is_timeout() {
                        ClientError::Timeout(self.timeout)
                    } else {
                        ClientError::Network(e)
                    };
                    debug!(attempt, error = %err, "get_json: request failed");
                    last_error = Some(err);
                    continue;
                }
            };

            let status = response.status().as_u16();

            if status == 429 {
                debug!("get_json: rate limited (429)");
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

                return Err(ClientError::RateLimited {
                    retry_after: Duration::from_secs(retry_after),
                });
            }

            if is_retryable_status(status) && attempt < self.max_retries {
                let text = response.text().await.unwrap_or_default();
                debug!(attempt, status, "get_json: retryable error");
                last_error = Some(ClientError::Api {
                    status,
                    message: error_message(&text),
                });
                continue;
            }

            if !response.status().is_success() {
                debug!(%status, "get_json: API error");
                let text = response.text().await.unwrap_or_default();
                return Err(ClientError::Api {
                    status,
                    message: error_message(&text),
                });
            }

            debug!(%status, "get_json: success");
            let bytes = response.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }

        Err(last_error.unwrap_or_else(|| ClientError::Config("Max retries exceeded".to_string())))
    }
}
