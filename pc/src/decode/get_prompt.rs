//! Get-prompt response decoder

use serde_json::Value;
use tracing::debug;

use super::{body, nullable_string, object, string, warning};
use crate::outcome::{Outcome, ok};
use crate::types::{GetPromptResponse, PromptModel, PromptRecord};

/// Decode `{ warning?, prompt: { text, version, systemText?, model } }`
pub fn decode_get_prompt(raw: &Value) -> Outcome<GetPromptResponse> {
    debug!("decode_get_prompt: called");
    let root = body(raw)?;
    let prompt = object(root, "", "prompt")?;
    let text = string(prompt, "prompt", "text")?;
    let version = string(prompt, "prompt", "version")?;
    let system_text = nullable_string(prompt, "prompt", "systemText")?;
    let model = object(prompt, "prompt", "model")?;

    ok(GetPromptResponse {
        prompt: PromptRecord {
            text,
            system_text,
            version,
            model: PromptModel::new(model.clone()),
        },
        warning: warning(root),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::outcome::PromptError;

    fn valid() -> Value {
        json!({
            "warning": "Prompt version 2 is deprecated",
            "prompt": {
                "text": "Summarize {{document}}",
                "systemText": "You are {{persona}}",
                "version": "2",
                "model": {"provider": "anthropic", "model": "claude", "parameters": {"maxLength": 512}}
            }
        })
    }

    fn failing_field(raw: Value) -> String {
        decode_get_prompt(&raw).unwrap_err().subject().to_string()
    }

    #[test]
    fn test_decode_valid() {
        let decoded = decode_get_prompt(&valid()).unwrap();
        assert_eq!(decoded.prompt.text, "Summarize {{document}}");
        assert_eq!(decoded.prompt.system_text.as_deref(), Some("You are {{persona}}"));
        assert_eq!(decoded.prompt.version, "2");
        assert_eq!(decoded.prompt.model.provider(), Some("anthropic"));
        assert_eq!(decoded.warning.as_deref(), Some("Prompt version 2 is deprecated"));
    }

    #[test]
    fn test_non_object_bodies() {
        for raw in [json!(null), json!([1, 2]), json!("prompt"), json!(42), json!(false)] {
            let err = decode_get_prompt(&raw).unwrap_err();
            assert_eq!(err, PromptError::malformed("body", "object"));
            assert!(err.to_string().contains("Invalid body format"));
        }
    }

    #[test]
    fn test_missing_prompt() {
        assert_eq!(failing_field(json!({})), "prompt");
        assert_eq!(failing_field(json!({"prompt": null})), "prompt");
        assert_eq!(failing_field(json!({"prompt": "text"})), "prompt");
    }

    #[test]
    fn test_text_checked_before_later_fields() {
        // Everything is wrong; the first check reports
        assert_eq!(failing_field(json!({"prompt": {"text": 1, "version": 2, "model": null}})), "prompt.text");
    }

    #[test]
    fn test_version_required() {
        let mut raw = valid();
        raw["prompt"]["version"] = json!(null);
        assert_eq!(failing_field(raw), "prompt.version");
    }

    #[test]
    fn test_system_text_nullable() {
        let mut raw = valid();
        raw["prompt"]["systemText"] = json!(null);
        assert_eq!(decode_get_prompt(&raw).unwrap().prompt.system_text, None);

        let mut raw = valid();
        raw["prompt"].as_object_mut().unwrap().remove("systemText");
        assert_eq!(decode_get_prompt(&raw).unwrap().prompt.system_text, None);

        let mut raw = valid();
        raw["prompt"]["systemText"] = json!(["not", "text"]);
        assert_eq!(failing_field(raw), "prompt.systemText");
    }

    #[test]
    fn test_model_must_be_object() {
        for model in [json!(null), json!("gpt"), json!([])] {
            let mut raw = valid();
            raw["prompt"]["model"] = model;
            assert_eq!(failing_field(raw), "prompt.model");
        }
    }

    #[test]
    fn test_warning_optional() {
        let mut raw = valid();
        raw.as_object_mut().unwrap().remove("warning");
        assert_eq!(decode_get_prompt(&raw).unwrap().warning, None);

        let mut raw = valid();
        raw["warning"] = json!({"level": "high"});
        assert_eq!(decode_get_prompt(&raw).unwrap().warning, None);
    }
}
