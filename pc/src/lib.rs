//! PromptCore - template variables and response decoding for managed prompts
//!
//! The pure half of the prompt SDK. Nothing in this crate performs I/O or
//! holds shared state; every function is synchronous and safe to call from
//! any thread or task.
//!
//! # Modules
//!
//! - [`template`] - Placeholder scanning, variable validation and substitution
//! - [`variables`] - Caller-supplied variable values
//! - [`outcome`] - The `Outcome` result type and [`PromptError`]
//! - [`decode`] - Structural decoders for untrusted JSON responses
//! - [`render`] - Validate-then-substitute over a decoded prompt
//!
//! # Example
//!
//! ```
//! use promptcore::{Variables, extract_variable_names, pick_variables, replace_variables};
//!
//! let template = "Hello {{name}}, welcome to {{place}}";
//! let names = extract_variable_names(template);
//! assert_eq!(names, vec!["name", "place"]);
//!
//! let supplied = Variables::new().with("name", "Ada").with("place", "London").with("unused", 1);
//! let picked = pick_variables(&names, &supplied).unwrap();
//! assert_eq!(picked.len(), 2);
//!
//! assert_eq!(replace_variables(template, &picked), "Hello Ada, welcome to London");
//! ```

pub mod decode;
pub mod outcome;
pub mod render;
pub mod template;
mod types;
pub mod variables;

pub use decode::{decode_describe_prompt, decode_get_prompt, decode_list_prompts};
pub use outcome::{Outcome, PromptError, err, ok};
pub use render::{RenderedPrompt, render_prompt, required_variables};
pub use template::{Placeholder, Placeholders, extract_variable_names, pick_variables, placeholders, replace_variables};
pub use types::{
    DescribePromptResponse, GetPromptResponse, ListPromptsResponse, PromptDescription, PromptModel, PromptRecord,
    VariableSpec,
};
pub use variables::{VariableValue, Variables};
