//! Validate-then-substitute over a decoded prompt

use serde::Serialize;
use tracing::debug;

use crate::outcome::{Outcome, ok};
use crate::template::{extract_variable_names, pick_variables, replace_variables};
use crate::types::{GetPromptResponse, PromptModel, PromptRecord};
use crate::variables::Variables;

/// A prompt with every placeholder resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPrompt {
    pub text: String,
    pub system_text: Option<String>,
    pub version: String,
    pub model: PromptModel,
    pub warning: Option<String>,
}

/// Unique variable names of `text` then `system_text`, in first-occurrence order
pub fn required_variables(record: &PromptRecord) -> Vec<String> {
    let mut names = extract_variable_names(&record.text);
    if let Some(system_text) = &record.system_text {
        names.extend(extract_variable_names(system_text));
    }

    let mut unique = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

/// Check that every variable the prompt uses is supplied, then substitute
pub fn render_prompt(response: &GetPromptResponse, variables: &Variables) -> Outcome<RenderedPrompt> {
    let record = &response.prompt;
    let required = required_variables(record);
    debug!(version = %record.version, required = required.len(), "render_prompt: called");

    let picked = pick_variables(&required, variables)?;

    ok(RenderedPrompt {
        text: replace_variables(&record.text, &picked),
        system_text: record.system_text.as_deref().map(|s| replace_variables(s, &picked)),
        version: record.version.clone(),
        model: record.model.clone(),
        warning: response.warning.clone(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;
    use crate::outcome::PromptError;

    fn response(text: &str, system_text: Option<&str>) -> GetPromptResponse {
        GetPromptResponse {
            prompt: PromptRecord {
                text: text.to_string(),
                system_text: system_text.map(str::to_string),
                version: "3".to_string(),
                model: PromptModel::new(Map::new()),
            },
            warning: Some("stale tag".to_string()),
        }
    }

    #[test]
    fn test_required_variables_unique_across_texts() {
        let resp = response("{{a}} {{b}} {{a}}", Some("{{c}} {{b}}"));
        assert_eq!(required_variables(&resp.prompt), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_render_substitutes_both_texts() {
        let resp = response("Answer {{question}}", Some("You are {{persona}}"));
        let vars = Variables::new()
            .with("question", "why?")
            .with("persona", "terse")
            .with("unused", 1);

        let rendered = render_prompt(&resp, &vars).unwrap();
        assert_eq!(rendered.text, "Answer why?");
        assert_eq!(rendered.system_text.as_deref(), Some("You are terse"));
        assert_eq!(rendered.version, "3");
        assert_eq!(rendered.warning.as_deref(), Some("stale tag"));
    }

    #[test]
    fn test_render_missing_system_variable_fails() {
        let resp = response("Answer {{question}}", Some("You are {{persona}}"));
        let vars = Variables::new().with("question", "why?");

        assert_eq!(
            render_prompt(&resp, &vars),
            Err(PromptError::MissingVariable {
                name: "persona".to_string()
            })
        );
    }

    #[test]
    fn test_render_without_placeholders() {
        let resp = response("static text", None);
        let rendered = render_prompt(&resp, &Variables::new()).unwrap();
        assert_eq!(rendered.text, "static text");
        assert_eq!(rendered.system_text, None);
    }
}
