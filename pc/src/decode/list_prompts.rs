//! List-prompts response decoder

use serde_json::Value;
use tracing::debug;

use super::{body, collection, warning};
use crate::outcome::{Outcome, ok};
use crate::types::ListPromptsResponse;

/// Decode `{ warning?, prompts: [...] | {...} }`
pub fn decode_list_prompts(raw: &Value) -> Outcome<ListPromptsResponse> {
    debug!("decode_list_prompts: called");
    let root = body(raw)?;
    let prompts = collection(root, "", "prompts")?;

    ok(ListPromptsResponse {
        prompts,
        warning: warning(root),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_array() {
        let decoded = decode_list_prompts(&json!({
            "prompts": [{"slug": "welcome"}, {"slug": "summary"}]
        }))
        .unwrap();
        assert_eq!(decoded.slugs(), vec!["welcome", "summary"]);
        assert_eq!(decoded.warning, None);
    }

    #[test]
    fn test_decode_object_and_warning() {
        let decoded = decode_list_prompts(&json!({"prompts": {}, "warning": "partial"})).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(decoded.warning.as_deref(), Some("partial"));
    }

    #[test]
    fn test_elements_are_opaque() {
        let decoded = decode_list_prompts(&json!({"prompts": [1, "two", null]})).unwrap();
        assert_eq!(decoded.len(), 3);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert_eq!(decode_list_prompts(&json!(null)).unwrap_err().subject(), "body");
        assert_eq!(decode_list_prompts(&json!([])).unwrap_err().subject(), "body");
        assert_eq!(decode_list_prompts(&json!({})).unwrap_err().subject(), "prompts");
        assert_eq!(decode_list_prompts(&json!({"prompts": null})).unwrap_err().subject(), "prompts");
        assert_eq!(decode_list_prompts(&json!({"prompts": "x"})).unwrap_err().subject(), "prompts");
    }
}
