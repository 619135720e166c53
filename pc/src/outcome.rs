//! Outcome type and error taxonomy
//!
//! Every fallible operation in this crate returns an [`Outcome`]. Expected
//! failures (a missing variable, a malformed payload) are values, never panics.

use thiserror::Error;

/// Errors produced by the template engine and the response decoders
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// A required variable has no defined value in the supplied map
    #[error("Missing variable: {name}")]
    MissingVariable { name: String },

    /// A response payload is not an object, or a required field is absent or mis-typed
    #[error("Invalid {field} format: expected {expected}")]
    MalformedResponse { field: String, expected: &'static str },
}

impl PromptError {
    pub(crate) fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    pub(crate) fn malformed(field: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedResponse {
            field: field.into(),
            expected,
        }
    }

    /// Name of the offending variable or response field
    pub fn subject(&self) -> &str {
        match self {
            Self::MissingVariable { name } => name,
            Self::MalformedResponse { field, .. } => field,
        }
    }
}

/// Success-with-value or failure-with-error
pub type Outcome<T> = Result<T, PromptError>;

/// Construct a success outcome
pub fn ok<T>(value: T) -> Outcome<T> {
    Ok(value)
}

/// Construct a failure outcome
pub fn err<T>(error: PromptError) -> Outcome<T> {
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_and_err_constructors() {
        let success: Outcome<u32> = ok(7);
        assert_eq!(success, Ok(7));

        let failure: Outcome<u32> = err(PromptError::missing_variable("name"));
        assert_eq!(
            failure,
            Err(PromptError::MissingVariable {
                name: "name".to_string()
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PromptError::missing_variable("user").to_string(), "Missing variable: user");
        assert_eq!(
            PromptError::malformed("body", "object").to_string(),
            "Invalid body format: expected object"
        );
        assert_eq!(
            PromptError::malformed("prompt.text", "string").to_string(),
            "Invalid prompt.text format: expected string"
        );
    }

    #[test]
    fn test_subject() {
        assert_eq!(PromptError::missing_variable("a").subject(), "a");
        assert_eq!(PromptError::malformed("prompt.model", "object").subject(), "prompt.model");
    }
}
