//! Prompt service client
//!
//! [`PromptClient`] pairs a [`Transport`] with the `promptcore` decoders and
//! template engine. The transport returns raw JSON; everything after that is
//! synchronous and pure.

use std::sync::Arc;

use promptcore::{
    DescribePromptResponse, GetPromptResponse, ListPromptsResponse, RenderedPrompt, Variables, decode_describe_prompt,
    decode_get_prompt, decode_list_prompts, render_prompt,
};
use tracing::{debug, warn};

mod error;
mod http;
mod request;
pub mod transport;

pub use error::ClientError;
pub use http::HttpTransport;
pub use request::{ApiRequest, DescribePromptRequest, GetPromptRequest, ListPromptsRequest};
pub use transport::Transport;

use crate::config::ApiConfig;

/// Typed access to the prompt endpoints
#[derive(Clone)]
pub struct PromptClient {
    transport: Arc<dyn Transport>,
}

impl PromptClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a client over [`HttpTransport`]
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Ok(Self::new(Arc::new(HttpTransport::from_config(config)?)))
    }

    /// Fetch and decode a prompt without substituting variables
    pub async fn fetch_prompt(&self, request: &GetPromptRequest) -> Result<GetPromptResponse, ClientError> {
        debug!(slug = %request.slug, "fetch_prompt: called");
        let raw = self.transport.get_json(&request.to_api_request()).await?;
        let response = decode_get_prompt(&raw)?;
        log_warning(&request.slug, response.warning.as_deref());
        Ok(response)
    }

    /// Fetch a prompt and render it with `variables`
    ///
    /// Fails with [`promptcore::PromptError::MissingVariable`] if the text or
    /// system text uses a variable that `variables` does not define.
    pub async fn get_prompt(
        &self,
        request: &GetPromptRequest,
        variables: &Variables,
    ) -> Result<RenderedPrompt, ClientError> {
        debug!(slug = %request.slug, variables = variables.len(), "get_prompt: called");
        let response = self.fetch_prompt(request).await?;
        Ok(render_prompt(&response, variables)?)
    }

    /// Fetch a prompt's metadata
    pub async fn describe_prompt(&self, request: &DescribePromptRequest) -> Result<DescribePromptResponse, ClientError> {
        debug!(slug = %request.0.slug, "describe_prompt: called");
        let raw = self.transport.get_json(&request.to_api_request()).await?;
        let response = decode_describe_prompt(&raw)?;
        log_warning(&request.0.slug, response.warning.as_deref());
        Ok(response)
    }

    pub async fn list_prompts(&self, request: &ListPromptsRequest) -> Result<ListPromptsResponse, ClientError> {
        debug!(feature = ?request.feature_slug, "list_prompts: called");
        let raw = self.transport.get_json(&request.to_api_request()).await?;
        let response = decode_list_prompts(&raw)?;
        log_warning("prompts", response.warning.as_deref());
        Ok(response)
    }
}

impl std::fmt::Debug for PromptClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptClient").finish_non_exhaustive()
    }
}

fn log_warning(subject: &str, warning: Option<&str>) {
    if let Some(warning) = warning {
        warn!(%subject, "Prompt service warning: {}", warning);
    }
}
