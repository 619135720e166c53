//! Transport trait definition

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiRequest, ClientError};

/// Issues requests against the prompt service and returns raw JSON bodies
///
/// Implementations own authentication, timeouts and retries. The body is
/// returned undecoded; shape validation happens in the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value, ClientError>;
}
