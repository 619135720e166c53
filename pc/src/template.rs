//! Template variable engine
//!
//! A placeholder is a literal `{{`, a payload, and the nearest following `}}`.
//! The payload is taken verbatim: it is not trimmed, may be empty, and may
//! itself contain braces, so `"{{a} } {{b}}"` is one placeholder named
//! `"a} } {{b"`. An unterminated `{{` is plain text.
//!
//! Scanning is a single left-to-right pass shared by extraction and
//! substitution, so both always agree on where placeholders are.

use tracing::{debug, trace};

use crate::outcome::{Outcome, PromptError, ok};
use crate::variables::Variables;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// One placeholder occurrence in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte offset of the opening `{{`
    pub start: usize,
    /// Byte offset one past the closing `}}`
    pub end: usize,
    /// Payload between the delimiters
    pub name: &'a str,
}

/// Iterator over the placeholders of a template, in scan order
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    template: &'a str,
    cursor: usize,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.template.get(self.cursor..)?;
        let open = self.cursor + rest.find(OPEN)?;
        let body = open + OPEN.len();
        let close = body + self.template[body..].find(CLOSE)?;
        let end = close + CLOSE.len();
        self.cursor = end;

        let placeholder = Placeholder {
            start: open,
            end,
            name: &self.template[body..close],
        };
        trace!(?placeholder, "Placeholders::next: found");
        Some(placeholder)
    }
}

/// Scan `template` for placeholders
pub fn placeholders(template: &str) -> Placeholders<'_> {
    Placeholders { template, cursor: 0 }
}

/// Every placeholder name in left-to-right order, duplicates included
pub fn extract_variable_names(template: &str) -> Vec<String> {
    let names: Vec<String> = placeholders(template).map(|p| p.name.to_string()).collect();
    debug!(count = names.len(), "extract_variable_names: done");
    names
}

/// Project `supplied` onto the `required` names
///
/// Fails on the first required name that is absent from `supplied` or present
/// but unset. On success the returned map holds exactly the required names;
/// anything else in `supplied` is dropped.
pub fn pick_variables<S: AsRef<str>>(required: &[S], supplied: &Variables) -> Outcome<Variables> {
    debug!(required = required.len(), supplied = supplied.len(), "pick_variables: called");
    let mut picked = Variables::new();
    for name in required {
        let name = name.as_ref();
        match supplied.get(name) {
            Some(value) => picked.insert(name, value.clone()),
            None => {
                debug!(%name, "pick_variables: missing variable");
                return Err(PromptError::missing_variable(name));
            }
        }
    }
    ok(picked)
}

/// Substitute defined variables into `template`
///
/// Placeholders whose name is absent or unset are kept as written. Inserted
/// values are not scanned again.
pub fn replace_variables(template: &str, variables: &Variables) -> String {
    let mut output = String::with_capacity(template.len());
    let mut copied = 0;
    let mut replaced = 0usize;

    for placeholder in placeholders(template) {
        if let Some(value) = variables.get(placeholder.name) {
            output.push_str(&template[copied..placeholder.start]);
            output.push_str(&value.to_string());
            copied = placeholder.end;
            replaced += 1;
        }
    }
    output.push_str(&template[copied..]);

    debug!(%replaced, "replace_variables: done");
    output
}
