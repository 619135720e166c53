//! Structural decoders for untrusted response bodies
//!
//! Each decoder takes whatever JSON the transport produced and runs an
//! ordered chain of checks. The first failing check returns
//! [`PromptError::MalformedResponse`] naming the field; later checks are not
//! evaluated. Optional fields with the wrong shape read as absent.

mod describe_prompt;
mod get_prompt;
mod list_prompts;

pub use describe_prompt::decode_describe_prompt;
pub use get_prompt::decode_get_prompt;
pub use list_prompts::decode_list_prompts;

use serde_json::{Map, Value};

use crate::outcome::{Outcome, PromptError};

type Object = Map<String, Value>;

fn path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// The response body itself must be an object
fn body(value: &Value) -> Outcome<&Object> {
    value.as_object().ok_or_else(|| PromptError::malformed("body", "object"))
}

fn object<'a>(obj: &'a Object, parent: &str, key: &str) -> Outcome<&'a Object> {
    obj.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| PromptError::malformed(path(parent, key), "object"))
}

fn string(obj: &Object, parent: &str, key: &str) -> Outcome<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| PromptError::malformed(path(parent, key), "string"))
}

/// Present-or-null string; missing counts as null
fn nullable_string(obj: &Object, parent: &str, key: &str) -> Outcome<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(PromptError::malformed(path(parent, key), "string or null")),
    }
}

/// Wrong-shaped values are dropped rather than rejected
fn optional_string(obj: &Object, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn array<'a>(obj: &'a Object, parent: &str, key: &str) -> Outcome<&'a Vec<Value>> {
    obj.get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| PromptError::malformed(path(parent, key), "array"))
}

fn string_array(obj: &Object, parent: &str, key: &str) -> Outcome<Vec<String>> {
    array(obj, parent, key)?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| PromptError::malformed(format!("{}[{}]", path(parent, key), i), "string"))
        })
        .collect()
}

/// Non-null array or object, contents not inspected
fn collection(obj: &Object, parent: &str, key: &str) -> Outcome<Value> {
    match obj.get(key) {
        Some(v @ (Value::Array(_) | Value::Object(_))) => Ok(v.clone()),
        _ => Err(PromptError::malformed(path(parent, key), "array or object")),
    }
}

/// Top-level `warning`, shared by every response shape
fn warning(obj: &Object) -> Option<String> {
    optional_string(obj, "warning")
}
