//! Typed records produced by the decoders

use serde::Serialize;
use serde_json::{Map, Value};

/// Opaque model configuration attached to a prompt
///
/// The server owns this shape; accessors read well-known keys without
/// requiring them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PromptModel(Map<String, Value>);

impl PromptModel {
    pub fn new(raw: Map<String, Value>) -> Self {
        Self(raw)
    }

    pub fn provider(&self) -> Option<&str> {
        self.0.get("provider").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("model").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.0.get("version").and_then(Value::as_str)
    }

    pub fn parameters(&self) -> Option<&Map<String, Value>> {
        self.0.get("parameters").and_then(Value::as_object)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// A prompt as served by the remote service, before substitution
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub text: String,
    pub system_text: Option<String>,
    pub version: String,
    pub model: PromptModel,
}

/// Decoded get-prompt response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetPromptResponse {
    pub prompt: PromptRecord,
    pub warning: Option<String>,
}

/// Decoded list-prompts response
///
/// `prompts` is either an array or an object; its elements are not inspected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPromptsResponse {
    pub prompts: Value,
    pub warning: Option<String>,
}

impl ListPromptsResponse {
    /// Array elements, or object values
    pub fn entries(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match &self.prompts {
            Value::Array(items) => Box::new(items.iter()),
            Value::Object(map) => Box::new(map.values()),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Best-effort slug of each entry; entries without a string `slug` are skipped
    pub fn slugs(&self) -> Vec<&str> {
        self.entries()
            .filter_map(|entry| entry.get("slug").and_then(Value::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Declared variable of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableSpec {
    pub label: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Metadata about a prompt, without its text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDescription {
    pub slug: String,
    pub name: String,
    pub status: String,
    pub description: Option<String>,
    pub available_versions: Vec<String>,
    pub available_tags: Vec<String>,
    pub variables: Vec<VariableSpec>,
}

/// Decoded describe-prompt response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescribePromptResponse {
    pub prompt: PromptDescription,
    pub warning: Option<String>,
}
