//! Describe-prompt response decoder

use serde_json::Value;
use tracing::debug;

use super::{Object, array, body, object, optional_string, string, string_array, warning};
use crate::outcome::{Outcome, PromptError, ok};
use crate::types::{DescribePromptResponse, PromptDescription, VariableSpec};

/// Decode `{ warning?, prompt: { slug, name, status, description?, availableVersions, availableTags, variables } }`
pub fn decode_describe_prompt(raw: &Value) -> Outcome<DescribePromptResponse> {
    debug!("decode_describe_prompt: called");
    let root = body(raw)?;
    let prompt = object(root, "", "prompt")?;
    let slug = string(prompt, "prompt", "slug")?;
    let name = string(prompt, "prompt", "name")?;
    let status = string(prompt, "prompt", "status")?;
    let description = optional_string(prompt, "description");
    let available_versions = string_array(prompt, "prompt", "availableVersions")?;
    let available_tags = string_array(prompt, "prompt", "availableTags")?;
    let variables = array(prompt, "prompt", "variables")?
        .iter()
        .enumerate()
        .map(|(i, item)| variable_spec(item, i))
        .collect::<Outcome<Vec<_>>>()?;

    ok(DescribePromptResponse {
        prompt: PromptDescription {
            slug,
            name,
            status,
            description,
            available_versions,
            available_tags,
            variables,
        },
        warning: warning(root),
    })
}

fn variable_spec(item: &Value, index: usize) -> Outcome<VariableSpec> {
    let parent = format!("prompt.variables[{}]", index);
    let spec: &Object = item
        .as_object()
        .ok_or_else(|| PromptError::malformed(parent.clone(), "object"))?;

    Ok(VariableSpec {
        label: string(spec, &parent, "label")?,
        description: optional_string(spec, "description"),
        kind: optional_string(spec, "type"),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid() -> Value {
        json!({
            "prompt": {
                "slug": "support-reply",
                "name": "Support reply",
                "status": "live",
                "description": "Drafts a reply to a customer ticket",
                "availableVersions": ["1", "2"],
                "availableTags": ["production"],
                "variables": [
                    {"label": "ticket", "description": "Ticket body", "type": "string"},
                    {"label": "tone"}
                ]
            }
        })
    }

    #[test]
    fn test_decode_valid() {
        let decoded = decode_describe_prompt(&valid()).unwrap();
        let prompt = decoded.prompt;
        assert_eq!(prompt.slug, "support-reply");
        assert_eq!(prompt.status, "live");
        assert_eq!(prompt.available_versions, vec!["1", "2"]);
        assert_eq!(prompt.available_tags, vec!["production"]);
        assert_eq!(prompt.variables.len(), 2);
        assert_eq!(prompt.variables[0].kind.as_deref(), Some("string"));
        assert_eq!(prompt.variables[1].label, "tone");
        assert_eq!(prompt.variables[1].description, None);
        assert_eq!(decoded.warning, None);
    }

    #[test]
    fn test_description_optional() {
        let mut raw = valid();
        raw["prompt"]["description"] = json!(7);
        assert_eq!(decode_describe_prompt(&raw).unwrap().prompt.description, None);
    }

    #[test]
    fn test_bad_version_element() {
        let mut raw = valid();
        raw["prompt"]["availableVersions"] = json!(["1", 2]);
        assert_eq!(
            decode_describe_prompt(&raw).unwrap_err().subject(),
            "prompt.availableVersions[1]"
        );
    }

    #[test]
    fn test_bad_variable_entry() {
        let mut raw = valid();
        raw["prompt"]["variables"] = json!([{"label": "ok"}, "nope"]);
        assert_eq!(decode_describe_prompt(&raw).unwrap_err().subject(), "prompt.variables[1]");

        let mut raw = valid();
        raw["prompt"]["variables"] = json!([{"description": "no label"}]);
        assert_eq!(
            decode_describe_prompt(&raw).unwrap_err().subject(),
            "prompt.variables[0].label"
        );
    }

    #[test]
    fn test_non_object_body() {
        assert_eq!(decode_describe_prompt(&json!(null)).unwrap_err().subject(), "body");
    }
}
